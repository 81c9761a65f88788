use learn_core::model::{CourseId, ProgressPercent};
use services::{CourseProgress, LearningStats};

use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardCourseVm {
    pub id: CourseId,
    pub title: String,
    pub progress: ProgressPercent,
    pub lessons_label: String,
    pub enrolled_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LearningStatsVm {
    pub courses_enrolled: usize,
    pub total_lessons: usize,
    pub completed_lessons: usize,
    pub average_label: String,
}

impl From<LearningStats> for LearningStatsVm {
    fn from(stats: LearningStats) -> Self {
        Self {
            courses_enrolled: stats.courses_enrolled,
            total_lessons: stats.total_lessons,
            completed_lessons: stats.completed_lessons,
            average_label: stats
                .average_progress
                .map_or_else(|| "-".to_string(), |p| p.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub courses: Vec<DashboardCourseVm>,
    pub stats: LearningStatsVm,
}

impl DashboardVm {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[must_use]
pub fn map_dashboard(items: &[CourseProgress], stats: LearningStats) -> DashboardVm {
    let courses = items
        .iter()
        .map(|item| DashboardCourseVm {
            id: item.course.id().clone(),
            title: item.course.title().to_owned(),
            progress: item.record.progress(),
            lessons_label: format!(
                "{} / {} lessons",
                item.record.completed_count(),
                item.course.lesson_count()
            ),
            enrolled_label: format!("Enrolled {}", format_date(item.record.enrolled_at())),
        })
        .collect();

    DashboardVm {
        courses,
        stats: stats.into(),
    }
}
