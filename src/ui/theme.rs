use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme};

/// Dark page background
pub const BACKGROUND: Color = Color {
    r: 0.12,
    g: 0.12,
    b: 0.15,
    a: 1.0,
};

/// Slightly lighter surface color for inputs and cards
const SURFACE: Color = Color {
    r: 0.18,
    g: 0.18,
    b: 0.22,
    a: 1.0,
};

/// Accent color for focus, headings and the trigger
pub const ACCENT: Color = Color {
    r: 0.35,
    g: 0.55,
    b: 0.85,
    a: 1.0,
};

const ERROR: Color = Color {
    r: 0.85,
    g: 0.3,
    b: 0.3,
    a: 1.0,
};

pub const TEXT_PRIMARY: Color = Color {
    r: 0.9,
    g: 0.9,
    b: 0.92,
    a: 1.0,
};

pub const TEXT_SECONDARY: Color = Color {
    r: 0.55,
    g: 0.55,
    b: 0.6,
    a: 1.0,
};

const fn faded(color: Color, a: f32) -> Color {
    Color {
        r: color.r,
        g: color.g,
        b: color.b,
        a,
    }
}

/// Style for the container wrapping the whole page
pub fn main_container(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(BACKGROUND.into()),
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for the order UID input
pub fn search_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let _ = theme;
    let focused = matches!(status, text_input::Status::Focused { .. });
    text_input::Style {
        background: SURFACE.into(),
        border: Border {
            color: if focused { ACCENT } else { Color::TRANSPARENT },
            width: if focused { 2.0 } else { 0.0 },
            radius: 8.0.into(),
        },
        icon: TEXT_SECONDARY,
        placeholder: TEXT_SECONDARY,
        value: TEXT_PRIMARY,
        selection: faded(ACCENT, 0.3),
    }
}

/// Style for the search trigger; greyed out while disabled
pub fn trigger(theme: &Theme, status: button::Status) -> button::Style {
    let _ = theme;
    let background = match status {
        button::Status::Disabled => SURFACE,
        button::Status::Hovered | button::Status::Pressed => faded(ACCENT, 0.8),
        _ => ACCENT,
    };
    button::Style {
        background: Some(background.into()),
        text_color: match status {
            button::Status::Disabled => TEXT_SECONDARY,
            _ => TEXT_PRIMARY,
        },
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 8.0.into(),
        },
        ..button::Style::default()
    }
}

/// Style for a titled section card
pub fn section(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(SURFACE.into()),
        border: Border {
            color: faded(Color::WHITE, 0.08),
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: faded(Color::BLACK, 0.4),
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(TEXT_PRIMARY),
        snap: false,
    }
}

/// Style for a nested card (line item, recent entry)
pub fn card(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(faded(ACCENT, 0.08).into()),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 6.0.into(),
        },
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for the error banner
pub fn error_banner(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(faded(ERROR, 0.15).into()),
        border: Border {
            color: ERROR,
            width: 1.0,
            radius: 8.0.into(),
        },
        text_color: Some(ERROR),
        ..container::Style::default()
    }
}
