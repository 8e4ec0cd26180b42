use iced::Color;

pub const BLACK: Color = iced::Color::BLACK;
pub const WHITE: Color = iced::Color::WHITE;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;

pub const SLATE_900: Color = Color::from_rgb(
    0x0F as f32 / 255.0,
    0x17 as f32 / 255.0,
    0x2A as f32 / 255.0,
);
pub const SLATE_700: Color = Color::from_rgb(
    0x33 as f32 / 255.0,
    0x41 as f32 / 255.0,
    0x55 as f32 / 255.0,
);
pub const SLATE_600: Color = Color::from_rgb(
    0x47 as f32 / 255.0,
    0x55 as f32 / 255.0,
    0x69 as f32 / 255.0,
);
pub const SLATE_400: Color = Color::from_rgb(
    0x94 as f32 / 255.0,
    0xA3 as f32 / 255.0,
    0xB8 as f32 / 255.0,
);
pub const SLATE_300: Color = Color::from_rgb(
    0xCB as f32 / 255.0,
    0xD5 as f32 / 255.0,
    0xE1 as f32 / 255.0,
);
pub const SLATE_200: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0xE8 as f32 / 255.0,
    0xF0 as f32 / 255.0,
);
pub const SLATE_100: Color = Color::from_rgb(
    0xF1 as f32 / 255.0,
    0xF5 as f32 / 255.0,
    0xF9 as f32 / 255.0,
);
pub const SLATE_50: Color = Color::from_rgb(
    0xF8 as f32 / 255.0,
    0xFA as f32 / 255.0,
    0xFC as f32 / 255.0,
);

pub const BLUE_700: Color = Color::from_rgb(
    0x1D as f32 / 255.0,
    0x4E as f32 / 255.0,
    0xD8 as f32 / 255.0,
);
pub const BLUE_600: Color = Color::from_rgb(
    0x25 as f32 / 255.0,
    0x63 as f32 / 255.0,
    0xEB as f32 / 255.0,
);
pub const BLUE_100: Color = Color::from_rgb(
    0xDB as f32 / 255.0,
    0xEA as f32 / 255.0,
    0xFE as f32 / 255.0,
);
pub const BLUE_50: Color = Color::from_rgb(
    0xEF as f32 / 255.0,
    0xF6 as f32 / 255.0,
    0xFF as f32 / 255.0,
);

pub const INDIGO_600: Color = Color::from_rgb(
    0x4F as f32 / 255.0,
    0x46 as f32 / 255.0,
    0xE5 as f32 / 255.0,
);

pub const RED_600: Color = Color::from_rgb(
    0xDC as f32 / 255.0,
    0x26 as f32 / 255.0,
    0x26 as f32 / 255.0,
);
pub const RED_500: Color = Color::from_rgb(
    0xEF as f32 / 255.0,
    0x44 as f32 / 255.0,
    0x44 as f32 / 255.0,
);
pub const RED_50: Color = Color::from_rgb(
    0xFE as f32 / 255.0,
    0xF2 as f32 / 255.0,
    0xF2 as f32 / 255.0,
);

pub const GREEN_800: Color = Color::from_rgb(
    0x16 as f32 / 255.0,
    0x65 as f32 / 255.0,
    0x34 as f32 / 255.0,
);
pub const GREEN_600: Color = Color::from_rgb(
    0x16 as f32 / 255.0,
    0xA3 as f32 / 255.0,
    0x4A as f32 / 255.0,
);
pub const GREEN_50: Color = Color::from_rgb(
    0xF0 as f32 / 255.0,
    0xFD as f32 / 255.0,
    0xF4 as f32 / 255.0,
);

pub const AMBER_600: Color = Color::from_rgb(
    0xD9 as f32 / 255.0,
    0x77 as f32 / 255.0,
    0x06 as f32 / 255.0,
);
pub const AMBER_50: Color = Color::from_rgb(
    0xFF as f32 / 255.0,
    0xFB as f32 / 255.0,
    0xEB as f32 / 255.0,
);

// Backdrop layer behind an open dialog.
pub const SCRIM: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.6);
