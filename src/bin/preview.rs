//! Prints the JSON of a sample form and optionally feeds a client response back into it.
//!
//! Usage: `form-preview <menu|modal|custom> [response-json]`

use anyhow::{Context, Result, bail};
use bedrock_forms::core::config::FormConfig;
use bedrock_forms::forms::{
    Button, Custom, Dropdown, Input, Label, Menu, Modal, Slider, StepSlider, Toggle,
};
use bedrock_forms::session::{FormResponse, PendingForms};
use serde_json::Value;
use tracing::info;

/// Button callbacks record their label here.
type Clicks = Vec<String>;

fn click(label: &'static str) -> impl FnMut(&mut Clicks) + Send + 'static {
    move |clicks: &mut Clicks| clicks.push(label.to_string())
}

fn sample_menu() -> Menu<Clicks> {
    Menu::new("Warps", "Pick a destination")
        .with_button(Button::new("Spawn").on_submit(click("spawn")))
        .with_button(
            Button::new("Arena")
                .with_image("textures/items/diamond_sword")
                .on_submit(click("arena")),
        )
        .with_button(
            Button::new("Website")
                .with_image("https://example.com/icon.png")
                .on_submit(click("website")),
        )
        .on_submit(|closed| info!(closed, "Menu submitted"))
}

fn sample_modal() -> Modal<Clicks> {
    Modal::new(
        "Confirm",
        "Teleport to spawn?",
        Button::new("Yes").on_submit(click("yes")),
        Button::new("No").on_submit(click("no")),
    )
    .on_submit(|closed| info!(closed, "Modal submitted"))
}

fn sample_custom() -> Custom {
    Custom::new("Settings")
        .with_element(Label::new("§lPreferences"))
        .with_element(
            Input::new("Nickname")
                .with_placeholder("Steve")
                .on_submit(|text| info!(%text, "Nickname")),
        )
        .with_element(
            Toggle::new("Show coordinates")
                .with_default(true)
                .on_submit(|enabled| info!(enabled, "Coordinates")),
        )
        .with_element(
            Slider::new("Render distance", 2.0, 32.0)
                .with_default(8.0)
                .on_submit(|value| info!(value, "Render distance")),
        )
        .with_element(
            Dropdown::new("Difficulty", ["Peaceful", "Easy", "Normal", "Hard"])
                .with_default(2)
                .on_submit(|index, option| info!(index, %option, "Difficulty")),
        )
        .with_element(
            StepSlider::new("Chat", ["Hidden", "Commands", "Shown"])
                .on_submit(|index, option| info!(index, %option, "Chat")),
        )
        .on_submit(|closed| info!(closed, "Settings submitted"))
}

fn main() -> Result<()> {
    bedrock_forms::setup_logging();

    let mut args = std::env::args().skip(1);
    let kind = args.next().unwrap_or_else(|| "menu".to_string());
    let response = args.next();

    let config = FormConfig::from_env().context("Failed to load form config")?;
    let mut pending: PendingForms<Clicks> = PendingForms::new(config);

    let request = match kind.as_str() {
        "menu" => pending.send(sample_menu())?,
        "modal" => pending.send(sample_modal())?,
        "custom" => pending.send(sample_custom())?,
        other => bail!("unknown form kind '{}', expected menu, modal or custom", other),
    };

    let rendered: Value = serde_json::from_str(&request.form_data)?;
    println!("{}", serde_json::to_string_pretty(&rendered)?);

    if let Some(response) = response {
        let mut clicks = Clicks::new();
        pending
            .respond(
                FormResponse::submitted(request.form_id, response.into_bytes()),
                &mut clicks,
            )
            .context("Form rejected the response")?;
        if !clicks.is_empty() {
            println!("clicked: {}", clicks.join(", "));
        }
    }

    Ok(())
}
