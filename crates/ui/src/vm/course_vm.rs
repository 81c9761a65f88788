use learn_core::model::{Course, CourseId, EnrollmentRecord, LessonId, ProgressPercent};

use crate::vm::format::{format_count, format_rating};

/// Catalog card shown on the home and courses pages.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseCardVm {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub students_label: String,
    pub rating_label: String,
    pub image_ref: String,
    pub enrolled: bool,
    pub progress: ProgressPercent,
}

impl CourseCardVm {
    /// Badge text, shown only once some progress exists.
    #[must_use]
    pub fn progress_badge(&self) -> Option<String> {
        self.progress
            .is_started()
            .then(|| format!("{} Complete", self.progress))
    }

    #[must_use]
    pub fn enroll_label(&self) -> &'static str {
        enroll_label(self.enrolled)
    }
}

fn enroll_label(enrolled: bool) -> &'static str {
    if enrolled {
        "Continue Learning"
    } else {
        "Enroll Now"
    }
}

#[must_use]
pub fn map_course_cards(courses: &[Course], records: &[EnrollmentRecord]) -> Vec<CourseCardVm> {
    courses
        .iter()
        .map(|course| {
            let record = records.iter().find(|r| r.course_id() == course.id());
            map_course_card(course, record)
        })
        .collect()
}

fn map_course_card(course: &Course, record: Option<&EnrollmentRecord>) -> CourseCardVm {
    CourseCardVm {
        id: course.id().clone(),
        title: course.title().to_owned(),
        description: course.description().to_owned(),
        duration: course.duration().to_owned(),
        students_label: format_count(course.student_count()),
        rating_label: format_rating(course.rating()),
        image_ref: course.image_ref().to_owned(),
        enrolled: record.is_some(),
        progress: record.map_or(ProgressPercent::ZERO, EnrollmentRecord::progress),
    }
}

/// One row of a course's lesson list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonRowVm {
    pub id: LessonId,
    pub number: u32,
    pub title: String,
    pub completed: bool,
}

impl LessonRowVm {
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Not started" }
    }

    #[must_use]
    pub fn action_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Mark Complete" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrollmentSummaryVm {
    pub progress: ProgressPercent,
    pub completed: usize,
    pub remaining: usize,
    pub total: usize,
}

impl EnrollmentSummaryVm {
    #[must_use]
    pub fn summary_label(&self) -> String {
        format!("{} of {} lessons completed", self.completed, self.total)
    }
}

/// Everything the course detail page renders.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseDetailVm {
    pub card: CourseCardVm,
    pub lessons: Vec<LessonRowVm>,
    pub enrollment: Option<EnrollmentSummaryVm>,
}

impl CourseDetailVm {
    #[must_use]
    pub fn enroll_label(&self) -> &'static str {
        enroll_label(self.enrollment.is_some())
    }
}

#[must_use]
pub fn map_course_detail(course: &Course, record: Option<&EnrollmentRecord>) -> CourseDetailVm {
    let card = map_course_card(course, record);

    let lessons = course
        .lesson_ids()
        .map(|(id, title)| LessonRowVm {
            id,
            number: id.number(),
            title: title.to_owned(),
            completed: record.is_some_and(|r| r.is_lesson_complete(id)),
        })
        .collect();

    let enrollment = record.map(|r| EnrollmentSummaryVm {
        progress: r.progress(),
        completed: r.completed_count(),
        remaining: r.remaining_count(),
        total: course.lesson_count(),
    });

    CourseDetailVm {
        card,
        lessons,
        enrollment,
    }
}
