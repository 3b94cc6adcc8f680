//! Message layouts for each page.
//!
//! Every screen is an embed plus its action rows, rebuilt from flow state after each
//! interaction. The choice helpers are plain data so they can be checked without
//! going through the serenity builders.

use serenity::{
    builder::{
        CreateComponents, CreateEmbed, CreateInteractionResponseData, EditInteractionResponse,
    },
    utils::Color,
};

pub mod arrendar;
pub mod reservas;

/// Discord limit on options per select menu.
pub const MAX_MENU_OPTIONS: usize = 25;

/// Discord limit on select option labels and descriptions.
pub const MAX_LABEL_CHARS: usize = 100;

/// Select value that clears a filter.
pub const ANY: &str = "*";

/// One option of a select menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuChoice {
    pub label: String,
    pub value: String,
    pub description: Option<String>,
    pub selected: bool,
}

impl MenuChoice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: clip(&label.into()),
            value: value.into(),
            description: None,
            selected: false,
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        if !description.is_empty() {
            self.description = Some(clip(&description));
        }
        self
    }

    pub fn select_if(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// Map a select value back to a filter, [`ANY`] meaning no filter.
pub fn choice_value(value: &str) -> Option<String> {
    if value == ANY || value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn clip(text: &str) -> String {
    if text.chars().count() <= MAX_LABEL_CHARS {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(MAX_LABEL_CHARS - 1).collect();
    clipped.push('…');
    clipped
}

/// Add a select menu row; menus without options are left out.
pub(crate) fn add_select(
    components: &mut CreateComponents,
    custom_id: &str,
    placeholder: &str,
    choices: &[MenuChoice],
) {
    if choices.is_empty() {
        return;
    }
    components.create_action_row(|row| {
        row.create_select_menu(|menu| {
            menu.custom_id(custom_id)
                .placeholder(placeholder)
                .min_values(1)
                .max_values(1)
                .options(|options| {
                    for choice in choices.iter().take(MAX_MENU_OPTIONS) {
                        options.create_option(|option| {
                            option
                                .label(&choice.label)
                                .value(&choice.value)
                                .default_selection(choice.selected);
                            if let Some(description) = &choice.description {
                                option.description(description);
                            }
                            option
                        });
                    }
                    options
                })
        })
    });
}

/// Rendered embed and components of one page state.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    pub embed: CreateEmbed,
    pub components: CreateComponents,
}

impl Screen {
    /// Append a transient notice, e.g. a rejected selection.
    pub fn with_notice(mut self, notice: &str) -> Self {
        self.embed.field("Aviso", notice, false);
        self.embed.color(Color::ORANGE);
        self
    }

    pub fn apply_data<'a, 'b>(
        self,
        data: &'b mut CreateInteractionResponseData<'a>,
    ) -> &'b mut CreateInteractionResponseData<'a> {
        let Screen { embed, components } = self;
        data.embed(|e| {
            *e = embed;
            e
        })
        .components(|c| {
            *c = components;
            c
        })
    }

    pub fn apply_edit(self, edit: &mut EditInteractionResponse) -> &mut EditInteractionResponse {
        let Screen { embed, components } = self;
        edit.content("")
            .embed(|e| {
                *e = embed;
                e
            })
            .components(|c| {
                *c = components;
                c
            })
    }
}
