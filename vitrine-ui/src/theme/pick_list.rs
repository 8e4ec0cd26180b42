use iced::{
    widget::pick_list::{Catalog, Status, Style, StyleFn},
    Border,
};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> <Self as Catalog>::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &<Self as Catalog>::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, _status: Status) -> Style {
    let input = &theme.colors.text_inputs.primary.active;
    Style {
        text_color: input.value,
        placeholder_color: input.placeholder,
        background: input.background.into(),
        border: if let Some(color) = input.border {
            Border {
                radius: 8.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                ..Default::default()
            }
        },
        handle_color: theme.colors.text.secondary,
    }
}

pub fn invalid(theme: &Theme, _status: Status) -> Style {
    let input = &theme.colors.text_inputs.invalid.active;
    Style {
        text_color: input.value,
        placeholder_color: input.placeholder,
        background: input.background.into(),
        border: if let Some(color) = input.border {
            Border {
                radius: 8.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                ..Default::default()
            }
        },
        handle_color: theme.colors.text.error,
    }
}
