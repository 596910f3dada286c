use std::time::Instant;

use crate::config::Config;
use crate::scoring::Vitals;
use crate::session::SessionState;
use crate::tui::theme::{resolve_theme, ThemeColors};

const FLASH_SECS: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Dashboard,
    Habits,
    Diet,
    Prevention,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Dashboard,
        Page::Habits,
        Page::Diet,
        Page::Prevention,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Dashboard => "Dashboard",
            Page::Habits => "Healthy Habits",
            Page::Diet => "Diet Plan",
            Page::Prevention => "Prevention Tips",
        }
    }

    pub fn index(self) -> usize {
        Page::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    pub fn previous(self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

/// Bounds and step for one Home-page slider.
pub struct SliderSpec {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub decimals: usize,
}

/// Slider order matches the vitals order everywhere else: age, BMI, blood
/// pressure, glucose.
pub const SLIDERS: [SliderSpec; 4] = [
    SliderSpec {
        label: "Age",
        min: 18.0,
        max: 90.0,
        step: 1.0,
        decimals: 0,
    },
    SliderSpec {
        label: "BMI",
        min: 15.0,
        max: 50.0,
        step: 0.5,
        decimals: 1,
    },
    SliderSpec {
        label: "Blood Pressure",
        min: 40.0,
        max: 130.0,
        step: 1.0,
        decimals: 0,
    },
    SliderSpec {
        label: "Glucose Level",
        min: 40.0,
        max: 200.0,
        step: 1.0,
        decimals: 0,
    },
];

pub struct App {
    pub page: Page,
    pub input_mode: InputMode,
    /// Index into SLIDERS of the focused Home-page control.
    pub focus: usize,
    /// Current slider positions, same order as SLIDERS.
    pub values: [f64; 4],
    pub session: SessionState,
    pub flash_message: Option<(String, Instant)>,
    pub last_assessed: Option<Instant>,
    pub should_quit: bool,
    pub theme: ThemeColors,
    pub tick_rate_ms: u64,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let d = &config.defaults;
        Self {
            page: Page::Home,
            input_mode: InputMode::Normal,
            focus: 0,
            values: [
                f64::from(d.age),
                d.bmi,
                f64::from(d.blood_pressure),
                f64::from(d.glucose),
            ],
            session: SessionState::new(),
            flash_message: None,
            last_assessed: None,
            should_quit: false,
            theme: resolve_theme(config.theme),
            tick_rate_ms: config.tick_rate_ms,
        }
    }

    /// Current slider positions as a vitals record.
    pub fn vitals(&self) -> Vitals {
        Vitals {
            age: self.values[0].round() as u32,
            bmi: self.values[1],
            blood_pressure: self.values[2].round() as u32,
            glucose: self.values[3].round() as u32,
        }
    }

    pub fn next_slider(&mut self) {
        self.focus = (self.focus + 1) % SLIDERS.len();
    }

    pub fn previous_slider(&mut self) {
        self.focus = (self.focus + SLIDERS.len() - 1) % SLIDERS.len();
    }

    pub fn increase_slider(&mut self) {
        let spec = &SLIDERS[self.focus];
        self.values[self.focus] = (self.values[self.focus] + spec.step).min(spec.max);
    }

    pub fn decrease_slider(&mut self) {
        let spec = &SLIDERS[self.focus];
        self.values[self.focus] = (self.values[self.focus] - spec.step).max(spec.min);
    }

    /// Submit the current vitals: records them into the session so the
    /// result cards and dashboard charts can read them.
    pub fn predict(&mut self) {
        let vitals = self.vitals();
        self.session.record_prediction(vitals);
        self.last_assessed = Some(Instant::now());
        self.show_flash("Assessed: see result below, charts on Dashboard".to_string());
    }

    pub fn next_page(&mut self) {
        self.page = self.page.next();
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.previous();
    }

    pub fn goto_page(&mut self, index: usize) {
        if let Some(page) = Page::ALL.get(index) {
            self.page = *page;
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
