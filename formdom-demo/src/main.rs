//! Scripted walkthrough of the demo page: a failed submit, a corrected
//! registration, a checkout purchase, and a global reset, with every
//! observable transition logged.

use std::time::Instant;

use formdom::prelude::*;
use formdom_demo::page;
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[tokio::main]
async fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
    }
}

async fn run() -> Result<(), FormError> {
    let mut app = page::app();
    let submitter = FixedDelaySubmitter::default();

    info!("--- pristine registration submit ---");
    drive(&mut app, &submitter, Action::Submit { form: "registration".into() }).await?;
    show_banner(&app)?;

    info!("--- filling the registration form ---");
    let entries = [
        ("firstName", "Juan"),
        ("lastName", "Pérez"),
        ("email", "juan@ejemplo.com"),
        ("password", "password123"),
        ("confirmPassword", "password123"),
        ("age", "30"),
    ];
    for (field, value) in entries {
        drive(
            &mut app,
            &submitter,
            Action::Input {
                field: field.into(),
                value: value.into(),
            },
        )
        .await?;
    }
    drive(
        &mut app,
        &submitter,
        Action::Toggle {
            field: "terms".into(),
            checked: true,
        },
    )
    .await?;

    drive(&mut app, &submitter, Action::Submit { form: "registration".into() }).await?;
    show_banner(&app)?;

    // Let the pristine submit's shake animations expire.
    tokio::time::sleep(SHAKE_DURATION).await;
    app.tick(Instant::now());

    info!("--- checkout purchase ---");
    drive(&mut app, &submitter, Action::SelectTab { tab: "checkout".into() }).await?;
    let entries = [
        ("cardNumber", "4111111111111111"),
        ("expiryDate", "1230"),
        ("cvv", "123"),
        ("cardName", "Juan Pérez"),
        ("billingAddress", "Calle Principal 123, Ciudad"),
    ];
    for (field, value) in entries {
        drive(
            &mut app,
            &submitter,
            Action::Input {
                field: field.into(),
                value: value.into(),
            },
        )
        .await?;
    }
    let card = app.document().require("cardNumber")?;
    info!("card number formatted as '{}'", card.value);

    drive(&mut app, &submitter, Action::Submit { form: "checkout".into() }).await?;
    show_banner(&app)?;

    info!("--- resetting all forms ---");
    drive(&mut app, &submitter, Action::ResetAll).await?;
    info!(
        "firstName value after reset: '{}'",
        app.document().require("firstName")?.value
    );
    Ok(())
}

/// Dispatch one action and run any submissions it starts to completion.
async fn drive(
    app: &mut App,
    submitter: &FixedDelaySubmitter,
    action: Action,
) -> Result<(), FormError> {
    let effects = app.dispatch(action, &Clock::system())?;
    for effect in effects {
        match effect {
            Effect::BeginSubmission {
                form,
                success_message,
            } => {
                submitter.submit(&form, &success_message).await;
                app.dispatch(Action::SubmissionComplete { form }, &Clock::system())?;
            }
        }
    }
    Ok(())
}

fn show_banner(app: &App) -> Result<(), FormError> {
    let banner = app.document().require(page::RESULT_MESSAGE)?;
    let results = app.document().require(page::RESULTS)?;
    info!(
        "banner [{}] visible={}: {}",
        banner.classes, results.visible, banner.text
    );
    Ok(())
}
