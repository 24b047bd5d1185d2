// SPDX-License-Identifier: MPL-2.0
//! Dashboard and course catalog screens.
//!
//! The catalog is static sample data; there is no course backend.

use crate::animation::{CounterAnimation, ProgressAnimation};
use crate::format::{format_date, format_duration, format_file_size, DateFormat};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use chrono::NaiveDate;
use iced::{
    alignment::Vertical,
    widget::{button, progress_bar, scrollable, Column, Container, Row, Space, Text},
    Element, Length,
};
use std::time::Instant;

/// Stat card labels, as authored. Counters animate up to these.
pub static STAT_LABELS: [(&str, &str); 4] = [
    ("Enrolled courses", "12"),
    ("Hours learned", "1,234+"),
    ("Certificates", "5"),
    ("Average score", "92%"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub title: &'static str,
    pub instructor: &'static str,
    /// Completion percentage.
    pub progress: f32,
    pub duration_secs: u64,
    pub materials_bytes: u64,
    /// Enrollment date as (year, month, day).
    pub enrolled: (i32, u32, u32),
    pub certificate_id: Option<&'static str>,
}

impl Course {
    fn enrolled_label(&self) -> String {
        let (year, month, day) = self.enrolled;
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|date| format_date(&date, DateFormat::Short))
            .unwrap_or_default()
    }
}

pub static CATALOG: [Course; 5] = [
    Course {
        title: "Rust Fundamentals",
        instructor: "Grace Hopper",
        progress: 75.0,
        duration_secs: 5 * 3600 + 30 * 60,
        materials_bytes: 157_286_400,
        enrolled: (2024, 1, 5),
        certificate_id: None,
    },
    Course {
        title: "Web Design Basics",
        instructor: "Tim Berners-Lee",
        progress: 100.0,
        duration_secs: 2 * 3600 + 45 * 60,
        materials_bytes: 48_234_496,
        enrolled: (2023, 11, 20),
        certificate_id: Some("LH-2024-00417"),
    },
    Course {
        title: "Data Structures",
        instructor: "Donald Knuth",
        progress: 40.0,
        duration_secs: 8 * 3600,
        materials_bytes: 1_288_490_189,
        enrolled: (2024, 2, 12),
        certificate_id: None,
    },
    Course {
        title: "Intro to Databases",
        instructor: "Edgar Codd",
        progress: 15.0,
        duration_secs: 45 * 60 + 10,
        materials_bytes: 5_242_880,
        enrolled: (2024, 3, 1),
        certificate_id: None,
    },
    Course {
        title: "Technical Writing",
        instructor: "Ada Lovelace",
        progress: 100.0,
        duration_secs: 3 * 3600 + 5,
        materials_bytes: 734_003,
        enrolled: (2023, 9, 8),
        certificate_id: Some("LH-2023-00982"),
    },
];

/// Courses whose title or instructor contains `query`, ignoring case.
/// A blank query matches everything.
pub fn filter_courses<'a>(courses: &'a [Course], query: &str) -> Vec<&'a Course> {
    let needle = query.trim().to_lowercase();
    courses
        .iter()
        .filter(|course| {
            needle.is_empty()
                || course.title.to_lowercase().contains(&needle)
                || course.instructor.to_lowercase().contains(&needle)
        })
        .collect()
}

#[derive(Debug, Clone)]
pub enum Message {
    CopyCertificate(String),
}

/// Running dashboard animations, one per stat card and course.
#[derive(Debug, Clone, Default)]
pub struct Animations {
    pub counters: Vec<CounterAnimation>,
    pub progress: Vec<ProgressAnimation>,
}

impl Animations {
    #[must_use]
    pub fn is_running_at(&self, now: Instant) -> bool {
        self.counters.iter().any(|c| !c.is_finished_at(now))
            || self.progress.iter().any(|p| !p.is_finished_at(now))
    }
}

pub struct ViewContext<'a> {
    pub user_name: &'a str,
    pub animations: &'a Animations,
    pub filter: &'a str,
    pub now: Instant,
}

pub fn view_dashboard<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(format!("Welcome back, {}!", ctx.user_name)).size(typography::TITLE_LG);

    let stats = STAT_LABELS.iter().enumerate().fold(
        Row::new().spacing(spacing::MD),
        |row, (index, (caption, label))| {
            let value = ctx
                .animations
                .counters
                .get(index)
                .map_or_else(|| (*label).to_string(), |counter| counter.display_at(ctx.now));
            row.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(Text::new(value).size(typography::TITLE_MD))
                        .push(Text::new(*caption).size(typography::CAPTION)),
                )
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(styles::container::card),
            )
        },
    );

    let progress = CATALOG.iter().enumerate().fold(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new("Your progress").size(typography::TITLE_SM)),
        |column, (index, course)| {
            let value = ctx
                .animations
                .progress
                .get(index)
                .map_or(course.progress, |bar| bar.value_at(ctx.now));
            column.push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(
                        Row::new()
                            .push(Text::new(course.title).size(typography::BODY))
                            .push(Space::new().width(Length::Fill))
                            .push(Text::new(format!("{value:.0}%")).size(typography::CAPTION)),
                    )
                    .push(
                        Container::new(progress_bar(0.0..=100.0, value))
                            .height(Length::Fixed(sizing::PROGRESS_HEIGHT)),
                    ),
            )
        },
    );

    let certificates = CATALOG
        .iter()
        .filter_map(|course| course.certificate_id.map(|id| (course.title, id)))
        .fold(
            Column::new()
                .spacing(spacing::SM)
                .push(Text::new("Certificates").size(typography::TITLE_SM)),
            |column, (title, id)| {
                column.push(
                    Row::new()
                        .spacing(spacing::SM)
                        .align_y(Vertical::Center)
                        .push(Text::new(title).size(typography::BODY).width(Length::Fill))
                        .push(Text::new(id).size(typography::CAPTION))
                        .push(
                            button(Text::new("Copy").size(typography::CAPTION))
                                .on_press(Message::CopyCertificate(id.to_string()))
                                .style(styles::button::ghost),
                        ),
                )
            },
        );

    scrollable(
        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(heading)
            .push(stats)
            .push(
                Container::new(progress)
                    .padding(spacing::MD)
                    .width(Length::Fill)
                    .style(styles::container::card),
            )
            .push(
                Container::new(certificates)
                    .padding(spacing::MD)
                    .width(Length::Fill)
                    .style(styles::container::card),
            ),
    )
    .into()
}

pub fn view_courses<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let matches = filter_courses(&CATALOG, ctx.filter);

    let heading = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new("Courses").size(typography::TITLE_LG))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(format!("{} of {}", matches.len(), CATALOG.len())).size(typography::CAPTION));

    let list = if matches.is_empty() {
        Column::new().push(Text::new(format!("No courses match \"{}\"", ctx.filter.trim())))
    } else {
        matches
            .into_iter()
            .fold(Column::new().spacing(spacing::SM), |column, course| {
                column.push(course_card(course))
            })
    };

    scrollable(
        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(heading)
            .push(list),
    )
    .into()
}

fn course_card<'a>(course: &'a Course) -> Element<'a, Message> {
    let details = format!(
        "{} \u{2022} {} \u{2022} {} materials \u{2022} enrolled {}",
        course.instructor,
        format_duration(course.duration_secs),
        format_file_size(course.materials_bytes),
        course.enrolled_label(),
    );

    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(course.title).size(typography::TITLE_SM))
            .push(Text::new(details).size(typography::CAPTION))
            .push(
                Container::new(progress_bar(0.0..=100.0, course.progress))
                    .height(Length::Fixed(sizing::PROGRESS_HEIGHT)),
            ),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationTiming;

    #[test]
    fn blank_filter_matches_everything() {
        assert_eq!(filter_courses(&CATALOG, "  ").len(), CATALOG.len());
    }

    #[test]
    fn filter_matches_title_or_instructor_case_insensitively() {
        let titles: Vec<_> = filter_courses(&CATALOG, "RUST")
            .iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["Rust Fundamentals"]);

        let by_instructor = filter_courses(&CATALOG, "knuth");
        assert_eq!(by_instructor.len(), 1);
        assert_eq!(by_instructor[0].title, "Data Structures");
    }

    #[test]
    fn unknown_filter_matches_nothing() {
        assert!(filter_courses(&CATALOG, "quantum").is_empty());
    }

    #[test]
    fn enrolled_label_uses_short_date() {
        assert_eq!(CATALOG[0].enrolled_label(), "Jan 5, 2024");
    }

    #[test]
    fn animations_stop_running_when_finished() {
        let start = Instant::now();
        let timing = AnimationTiming::default();
        let animations = Animations {
            counters: vec![CounterAnimation::from_text("12", &timing, start)],
            progress: vec![ProgressAnimation::new(50.0, &timing, start)],
        };
        assert!(animations.is_running_at(start));
        assert!(!animations.is_running_at(start + std::time::Duration::from_secs(5)));
        assert!(!Animations::default().is_running_at(start));
    }
}
