use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
    pub progress_bars: ProgressBars,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
    pub scrollable: iced::Color,
    pub scrim: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub warning: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub transparent: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
    pub modal: ContainerPalette,
    pub invalid: ContainerPalette,
    pub warning: ContainerPalette,
    pub error: ContainerPalette,
    pub success: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub pending: ContainerPalette,
    pub error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProgressBars {
    pub background: iced::Color,
    pub bar: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::SLATE_50,
                foreground: color::WHITE,
                scrollable: color::SLATE_300,
                scrim: color::SCRIM,
            },
            text: Text {
                primary: color::SLATE_900,
                secondary: color::SLATE_600,
                warning: color::AMBER_600,
                success: color::GREEN_600,
                error: color::RED_600,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::BLUE_600,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::BLUE_700,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::INDIGO_600,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::SLATE_200,
                        text: color::SLATE_400,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::SLATE_900,
                        border: color::SLATE_300.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::SLATE_100,
                        text: color::SLATE_900,
                        border: color::SLATE_300.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::SLATE_200,
                        text: color::SLATE_900,
                        border: color::SLATE_300.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::SLATE_100,
                        text: color::SLATE_400,
                        border: color::SLATE_200.into(),
                    }),
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::SLATE_600,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::SLATE_100,
                        text: color::SLATE_900,
                        border: None,
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::SLATE_400,
                        border: None,
                    }),
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: color::SLATE_200.into(),
                },
                modal: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: color::SLATE_200.into(),
                },
                invalid: ContainerPalette {
                    background: color::WHITE,
                    text: Some(color::RED_600),
                    border: color::RED_500.into(),
                },
                warning: ContainerPalette {
                    background: color::AMBER_50,
                    text: Some(color::AMBER_600),
                    border: color::AMBER_600.into(),
                },
                error: ContainerPalette {
                    background: color::RED_50,
                    text: Some(color::RED_600),
                    border: color::RED_500.into(),
                },
                success: ContainerPalette {
                    background: color::GREEN_50,
                    text: Some(color::GREEN_800),
                    border: color::GREEN_600.into(),
                },
            },
            notifications: Notifications {
                pending: ContainerPalette {
                    background: color::BLUE_50,
                    text: Some(color::BLUE_700),
                    border: color::BLUE_100.into(),
                },
                error: ContainerPalette {
                    background: color::RED_50,
                    text: Some(color::RED_600),
                    border: color::RED_500.into(),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::SLATE_600,
                        placeholder: color::SLATE_400,
                        value: color::SLATE_900,
                        selection: color::BLUE_100,
                        border: color::SLATE_300.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::SLATE_100,
                        icon: color::SLATE_400,
                        placeholder: color::SLATE_400,
                        value: color::SLATE_600,
                        selection: color::BLUE_100,
                        border: color::SLATE_200.into(),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::RED_500,
                        placeholder: color::SLATE_400,
                        value: color::SLATE_900,
                        selection: color::BLUE_100,
                        border: color::RED_500.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::SLATE_100,
                        icon: color::SLATE_400,
                        placeholder: color::SLATE_400,
                        value: color::SLATE_600,
                        selection: color::BLUE_100,
                        border: color::RED_500.into(),
                    },
                },
            },
            progress_bars: ProgressBars {
                background: color::SLATE_200,
                bar: color::BLUE_600,
                border: None,
            },
        }
    }
}
