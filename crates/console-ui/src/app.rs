//! Main application component.

use console_core::{Band, DigitPosition, Mode, ScrollDirection, TuningRate};
use leptos::*;

use crate::components::{
    BandSelector, FrequencyDisplay, JogDial, ModeSelector, RateSelector, TuningSlider,
};
use crate::http::dispatch;
use crate::state::{provide_app_context, AppContext};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    // Provide application context
    let ctx = provide_app_context();

    view! {
        <main class="console-app">
            <Header />
            <div class="main-content">
                <div class="dial-section">
                    <DialPanel ctx=ctx />
                </div>
                <div class="control-section">
                    <TuningPanel ctx=ctx />
                </div>
            </div>
            <StatusBar ctx=ctx />
        </main>
    }
}

/// Application header.
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1>"Web Console"</h1>
        </header>
    }
}

/// Jog dial and tuning slider.
#[component]
fn DialPanel(ctx: AppContext) -> impl IntoView {
    let on_rotate = Callback::new(move |rotation: f64| {
        let command = ctx.panel.with(|p| p.dial_moved(rotation));
        dispatch(&ctx, command);
    });

    let on_slide = Callback::new(move |level: u8| {
        if let Some(command) = ctx.panel.try_update(|p| p.slider_moved(level)) {
            dispatch(&ctx, command);
        }
    });

    view! {
        <JogDial on_rotate=on_rotate />
        <TuningSlider level=ctx.slider() on_change=on_slide />
    }
}

/// Frequency readout and the three selection groups.
#[component]
fn TuningPanel(ctx: AppContext) -> impl IntoView {
    let on_scroll = Callback::new(move |(position, direction): (DigitPosition, ScrollDirection)| {
        let command = ctx.panel.with(|p| p.digit_scrolled(position, direction));
        dispatch(&ctx, command);
    });

    // The panel handlers select the clicked member (deselecting the
    // rest of its group locally) and hand back the request to issue.
    let on_rate = Callback::new(move |rate: TuningRate| {
        if let Some(command) = ctx.panel.try_update(|p| p.rate_clicked(rate)) {
            dispatch(&ctx, command);
        }
    });

    let on_mode = Callback::new(move |mode: Mode| {
        if let Some(command) = ctx.panel.try_update(|p| p.mode_clicked(mode)) {
            dispatch(&ctx, command);
        }
    });

    let on_band = Callback::new(move |band: Band| {
        if let Some(command) = ctx.panel.try_update(|p| p.band_clicked(band)) {
            dispatch(&ctx, command);
        }
    });

    view! {
        <FrequencyDisplay digits=ctx.digits() on_scroll=on_scroll />
        <div class="selector-row">
            <RateSelector rate=ctx.rate() on_change=on_rate />
            <ModeSelector mode=ctx.mode() on_change=on_mode />
        </div>
        <BandSelector band=ctx.band() on_change=on_band />
    }
}

/// Status bar at bottom of application.
#[component]
fn StatusBar(ctx: AppContext) -> impl IntoView {
    let frequency_text = move || {
        let hz = ctx.digits().get().to_hz();
        format!("{:.6} MHz", hz as f64 / 1_000_000.0)
    };

    let mode_text = move || ctx.mode().get().label();
    let band_text = move || ctx.band().get().label();

    view! {
        <footer class="status-bar">
            <span class="frequency">{frequency_text}</span>
            <span class="band">{band_text}</span>
            <span class="mode">{mode_text}</span>
            <span class="version">"Radio Console v0.1.0"</span>
        </footer>
    }
}
