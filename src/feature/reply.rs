use typed_builder::TypedBuilder;

#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct EmbedField {
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into))]
    pub value: String,
    #[builder(default = true)]
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct EmbedFooter {
    #[builder(setter(into))]
    pub text: String,
    #[builder(default, setter(strip_option, into))]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct EmbedCard {
    #[builder(setter(into))]
    pub title: String,
    #[builder(setter(into))]
    pub description: String,
    pub color: u32,
    #[builder(default, setter(strip_option, into))]
    pub thumbnail: Option<String>,
    #[builder(default, setter(strip_option, into))]
    pub image: Option<String>,
    #[builder(default)]
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
    #[builder(default = true)]
    pub timestamp: bool,
}

/// A button that navigates to `url` without producing an interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkButton {
    pub label: &'static str,
    pub emoji: &'static str,
    pub url: &'static str,
}

/// What to send back for an interaction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reply {
    pub content: Option<String>,
    pub ephemeral: bool,
    pub embeds: Vec<EmbedCard>,
    pub buttons: Vec<LinkButton>,
}

impl Reply {
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ephemeral: true,
            ..Default::default()
        }
    }

    pub fn embed(card: EmbedCard) -> Self {
        Self {
            embeds: vec![card],
            ..Default::default()
        }
    }

    pub fn with_buttons(mut self, buttons: &[LinkButton]) -> Self {
        self.buttons = buttons.to_vec();
        self
    }
}
