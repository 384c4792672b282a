use std::cell::RefCell;

use shared::constants::{FAILURE_MESSAGE, SUCCESS_MESSAGE};
use shared::submission::SubmissionOutcome;
use web_sys::Element;
use yew::prelude::*;
use yew::AppHandle;

// One results panel per page; a new submission replaces the previous one.
thread_local! {
    static RESULTS_APP: RefCell<Option<AppHandle<SubmissionResults>>> = RefCell::new(None);
}

#[derive(Properties, PartialEq)]
pub struct SubmissionResultsProps {
    pub outcome: SubmissionOutcome,
    #[prop_or_default]
    pub success_animation: Option<AttrValue>,
}

#[function_component(SubmissionResults)]
pub fn submission_results(props: &SubmissionResultsProps) -> Html {
    match &props.outcome {
        SubmissionOutcome::Solved { .. } => html! {
            <>
                <p style="color:green; text-align: center;">{ SUCCESS_MESSAGE }</p>
                {
                    if let Some(src) = props.success_animation.clone() {
                        html! {
                            <div class="success-container">
                                <dotlottie-player
                                    src={src}
                                    background="#00000000"
                                    speed="1"
                                    style="width: 800px; height: 800px"
                                    direction="1"
                                    mode="normal"
                                    autoplay=true
                                ></dotlottie-player>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </>
        },
        SubmissionOutcome::Partial { verdicts } => html! {
            <>
                <p style="color:red; text-align: center;">{ FAILURE_MESSAGE }</p>
                {
                    for verdicts.iter().map(|verdict| {
                        let color = if verdict.correct { "green" } else { "red" };
                        html! {
                            <p class="jumble-verdict" style={format!("color:{}; text-align: center;", color)}>
                                { verdict.describe() }
                            </p>
                        }
                    })
                }
            </>
        },
    }
}

/// Shows `outcome` inside `root`, replacing any earlier results.
pub fn show_results(root: Element, props: SubmissionResultsProps) {
    RESULTS_APP.with(|cell| {
        let mut slot = cell.borrow_mut();
        if let Some(previous) = slot.take() {
            previous.destroy();
        }
        *slot = Some(yew::Renderer::<SubmissionResults>::with_root_and_props(root, props).render());
    });
}
