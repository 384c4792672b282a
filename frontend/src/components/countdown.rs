use chrono::{Local, NaiveDateTime};
use gloo_timers::callback::Interval;
use shared::calendar::seconds_until_midnight;
use shared::config::{CountdownAnchor, PageConfig};
use shared::constants::COUNTDOWN_TICK_MS;
use shared::countdown::CountdownState;
use web_sys::Element;
use yew::prelude::*;

/// Initial counter for a page loaded at `now`.
pub fn initial_state(config: &PageConfig, now: NaiveDateTime) -> CountdownState {
    let period = config.countdown_period_seconds;
    match config.countdown_start {
        CountdownAnchor::Period => CountdownState::new(period),
        CountdownAnchor::Midnight => CountdownState::starting_at(seconds_until_midnight(now), period),
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownDisplayProps {
    pub state: CountdownState,
    pub prefix: AttrValue,
    pub wrap: CountdownAnchor,
}

#[function_component(CountdownDisplay)]
pub fn countdown_display(props: &CountdownDisplayProps) -> Html {
    let text = use_state(String::new);

    {
        let text = text.clone();
        let prefix = props.prefix.clone();
        let wrap = props.wrap;

        use_effect_with(props.state, move |initial| {
            let mut state = *initial;
            let mut render = move || {
                let tick = state.tick();
                if tick.wrapped && wrap == CountdownAnchor::Midnight {
                    state.rewind_to(seconds_until_midnight(Local::now().naive_local()));
                }
                text.set(format!("{}{}", prefix, tick.clock));
            };

            // First frame now rather than a second from now
            render();
            let interval = Interval::new(COUNTDOWN_TICK_MS, render);

            move || drop(interval)
        });
    }

    html! {
        <span class="countdown-clock">{ (*text).clone() }</span>
    }
}

/// Mounts a ticking countdown inside `root` for the rest of the page's life.
pub fn mount_countdown(root: Element, config: &PageConfig) {
    let props = CountdownDisplayProps {
        state: initial_state(config, Local::now().naive_local()),
        prefix: AttrValue::from(config.countdown_prefix.clone()),
        wrap: config.countdown_wrap,
    };
    log::debug!("countdown starting at {}s", props.state.remaining_seconds);
    yew::Renderer::<CountdownDisplay>::with_root_and_props(root, props).render();
}
