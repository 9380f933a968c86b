mod lesson;
mod qa;
mod quiz;

#[cfg(test)]
mod view_smoke;

pub use lesson::LessonView;
