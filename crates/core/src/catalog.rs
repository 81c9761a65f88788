//! The course catalog shipped with the application.

use crate::error::Error;
use crate::model::{Course, CourseId};

struct CourseSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    duration: &'static str,
    student_count: u32,
    rating: f32,
    image_ref: &'static str,
    lessons: [&'static str; 6],
}

const SEEDS: [CourseSeed; 3] = [
    CourseSeed {
        id: "html",
        title: "Complete HTML Mastery",
        description: "Master the fundamentals of HTML from basic tags to advanced semantic elements and accessibility features.",
        duration: "4 weeks",
        student_count: 12_500,
        rating: 4.9,
        image_ref: "https://images.pexels.com/photos/1181671/pexels-photo-1181671.jpeg?auto=compress&cs=tinysrgb&w=400",
        lessons: [
            "HTML Document Structure",
            "Basic Tags and Elements",
            "Forms and Input Elements",
            "Semantic HTML5 Elements",
            "Accessibility Best Practices",
            "HTML5 APIs and Features",
        ],
    },
    CourseSeed {
        id: "css",
        title: "Advanced CSS & Styling",
        description: "Learn modern CSS techniques including Flexbox, Grid, animations, and responsive design principles.",
        duration: "6 weeks",
        student_count: 10_800,
        rating: 4.8,
        image_ref: "https://images.pexels.com/photos/1779487/pexels-photo-1779487.jpeg?auto=compress&cs=tinysrgb&w=400",
        lessons: [
            "CSS Fundamentals and Selectors",
            "Flexbox and Grid Layouts",
            "Responsive Design Principles",
            "CSS Animations and Transitions",
            "Modern CSS Features",
            "CSS Architecture and Best Practices",
        ],
    },
    CourseSeed {
        id: "javascript",
        title: "JavaScript Fundamentals",
        description: "Build interactive web applications with JavaScript, from basic syntax to advanced concepts and DOM manipulation.",
        duration: "8 weeks",
        student_count: 15_200,
        rating: 4.9,
        image_ref: "https://images.pexels.com/photos/1181675/pexels-photo-1181675.jpeg?auto=compress&cs=tinysrgb&w=400",
        lessons: [
            "JavaScript Basics and Syntax",
            "Functions and Scope",
            "DOM Manipulation",
            "Event Handling",
            "Asynchronous JavaScript",
            "ES6+ Modern Features",
        ],
    },
];

/// Builds the default catalog in display order.
///
/// # Errors
///
/// Returns `Error` if a seed fails course validation.
pub fn default_catalog() -> Result<Vec<Course>, Error> {
    SEEDS.iter().map(build_course).collect()
}

fn build_course(seed: &CourseSeed) -> Result<Course, Error> {
    let course = Course::new(
        CourseId::new(seed.id)?,
        seed.title,
        seed.description,
        seed.duration,
        seed.student_count,
        seed.rating,
        seed.image_ref,
        seed.lessons.iter().map(|l| (*l).to_owned()).collect(),
    )?;
    Ok(course)
}
