//! Small timetables for unit tests.

use crate::core::domain::{
    Exam, ExamId, Instructor, InstructorId, Owner, Period, Placement, Room, RoomId, RoomPlacement,
};
use crate::core::timetable::{Assignment, InstructorIndex, Timetable};
use crate::distance::{DistanceMetric, DistanceResolver};

use super::conflicts::{ConflictClassifier, ConflictSettings};
use super::rows::ConflictRowBuilder;

pub(crate) struct Scenario {
    periods: Vec<Period>,
    rooms: Vec<Room>,
    exams: Vec<Exam>,
    instructors: Vec<Instructor>,
    placements: Vec<(ExamId, usize, Vec<RoomId>)>,
    next_owner: u64,
}

impl Scenario {
    /// `days` days of `per_day` periods each, labelled "Day d" / "Slot s".
    pub(crate) fn new(days: usize, per_day: usize) -> Self {
        let periods = (0..days * per_day)
            .map(|i| {
                Period::new(
                    i,
                    i / per_day,
                    format!("Day {}", i / per_day + 1),
                    format!("Slot {}", i % per_day + 1),
                )
            })
            .collect();
        Self {
            periods,
            rooms: Vec::new(),
            exams: Vec::new(),
            instructors: Vec::new(),
            placements: Vec::new(),
            next_owner: 1000,
        }
    }

    pub(crate) fn room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    pub(crate) fn instructor(mut self, id: u64, name: &str) -> Self {
        self.instructors.push(Instructor::new(id, name));
        self
    }

    /// Add an exam taught by `instructor` with the given owner names, placed
    /// in `period` and `rooms`.
    pub(crate) fn exam(
        mut self,
        id: u64,
        name: &str,
        instructor: u64,
        owners: &[&str],
        period: usize,
        rooms: &[u64],
    ) -> Self {
        let mut exam = Exam::new(id, name);
        for owner in owners {
            exam = exam.with_owner(Owner::new(self.next_owner, *owner).taught_by(instructor));
            self.next_owner += 1;
        }
        self.exams.push(exam);
        if let Some(i) = self.instructors.iter_mut().find(|i| i.id == InstructorId(instructor)) {
            i.exams.push(ExamId(id));
        }
        self.placements
            .push((ExamId(id), period, rooms.iter().map(|&r| RoomId(r)).collect()));
        self
    }

    pub(crate) fn build(self) -> Fixture {
        let timetable = Timetable::new(self.periods, self.rooms, self.exams, self.instructors).unwrap();
        let mut assignment = Assignment::new();
        for (exam, period, rooms) in self.placements {
            let rooms = rooms
                .into_iter()
                .map(|id| RoomPlacement::from(timetable.room(id).unwrap()))
                .collect();
            assignment.assign(exam, Placement::new(period, rooms));
        }
        let index = InstructorIndex::build(&timetable, &assignment).unwrap();
        Fixture {
            timetable,
            assignment,
            index,
        }
    }
}

pub(crate) struct Fixture {
    pub(crate) timetable: Timetable,
    pub(crate) assignment: Assignment,
    pub(crate) index: InstructorIndex,
}

impl Fixture {
    pub(crate) fn classifier<'a>(
        &'a self,
        metric: &'a dyn DistanceMetric,
        settings: ConflictSettings,
    ) -> ConflictClassifier<'a> {
        ConflictClassifier::new(
            &self.timetable,
            &self.assignment,
            &self.index,
            DistanceResolver::new(metric),
            settings,
        )
    }

    pub(crate) fn row_builder(&self) -> ConflictRowBuilder<'_> {
        ConflictRowBuilder::new(&self.timetable, &self.assignment)
    }

    pub(crate) fn instructor(&self, id: u64) -> &Instructor {
        self.timetable
            .instructors()
            .iter()
            .find(|i| i.id == InstructorId(id))
            .unwrap()
    }
}
