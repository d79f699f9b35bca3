//! Reducer for the compose form.

use crate::reply::GENERATION_FAILED_MESSAGE;
use crate::ui::mvi::Reducer;

use super::intent::ComposeIntent;
use super::state::{ComposePhase, ComposeState};

/// Reducer for compose form state transitions.
///
/// Pure function. Sending the request and logging failures are done by
/// `ComposeSession` around the dispatch.
pub struct ComposeReducer;

impl Reducer for ComposeReducer {
    type State = ComposeState;
    type Intent = ComposeIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ComposeIntent::InsertChar(ch) => {
                state.email_content.push(ch);
                state
            }

            ComposeIntent::Backspace => {
                state.email_content.pop();
                state
            }

            ComposeIntent::Paste(text) => {
                state.email_content.push_str(&normalize_newlines(&text));
                state
            }

            ComposeIntent::SetContent(text) => {
                state.email_content = text;
                state
            }

            ComposeIntent::ClearContent => {
                state.email_content.clear();
                state
            }

            ComposeIntent::SelectTone(tone) => {
                state.tone = tone;
                state
            }

            ComposeIntent::NextTone => {
                state.tone = state.tone.next();
                state
            }

            ComposeIntent::PreviousTone => {
                state.tone = state.tone.previous();
                state
            }

            ComposeIntent::Submit => {
                if !state.can_submit() {
                    return state;
                }
                let generation = state.last_generation.wrapping_add(1);
                state.last_generation = generation;
                state.error.clear();
                state.phase = ComposePhase::Submitting {
                    generation,
                    animation_tick: 0,
                };
                state
            }

            ComposeIntent::AnimationTick => {
                if let ComposePhase::Submitting {
                    generation,
                    animation_tick,
                } = state.phase
                {
                    state.phase = ComposePhase::Submitting {
                        generation,
                        animation_tick: animation_tick.wrapping_add(1),
                    };
                }
                state
            }

            ComposeIntent::GenerationSucceeded { generation, reply } => {
                if state.in_flight_generation() != Some(generation) {
                    return state;
                }
                state.generated_reply = reply;
                state.error.clear();
                state.phase = ComposePhase::Succeeded;
                state
            }

            ComposeIntent::GenerationFailed { generation } => {
                if state.in_flight_generation() != Some(generation) {
                    return state;
                }
                state.error = GENERATION_FAILED_MESSAGE.to_string();
                state.phase = ComposePhase::Failed;
                state
            }
        }
    }
}

// Terminals deliver pasted line breaks as CR.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::Tone;

    fn with_content(text: &str) -> ComposeState {
        ComposeReducer::reduce(
            ComposeState::default(),
            ComposeIntent::SetContent(text.to_string()),
        )
    }

    #[test]
    fn submit_with_content_starts_first_generation() {
        let state = ComposeReducer::reduce(with_content("Hi"), ComposeIntent::Submit);
        assert_eq!(
            state.phase,
            ComposePhase::Submitting {
                generation: 1,
                animation_tick: 0
            }
        );
        assert!(state.is_loading());
    }

    #[test]
    fn submit_without_content_is_inert() {
        let before = ComposeState::default();
        let after = ComposeReducer::reduce(before.clone(), ComposeIntent::Submit);
        assert_eq!(before, after);
    }

    #[test]
    fn submit_while_loading_is_inert() {
        let loading = ComposeReducer::reduce(with_content("Hi"), ComposeIntent::Submit);
        let again = ComposeReducer::reduce(loading.clone(), ComposeIntent::Submit);
        assert_eq!(loading, again);
    }

    #[test]
    fn submit_clears_previous_error_but_keeps_reply() {
        let mut state = with_content("Hi");
        state.generated_reply = "old reply".to_string();
        state.error = GENERATION_FAILED_MESSAGE.to_string();
        state.phase = ComposePhase::Failed;

        let state = ComposeReducer::reduce(state, ComposeIntent::Submit);
        assert!(state.error.is_empty());
        assert_eq!(state.generated_reply, "old reply");
    }

    #[test]
    fn success_stores_reply_and_stops_loading() {
        let state = ComposeReducer::reduce(with_content("Hi"), ComposeIntent::Submit);
        let state = ComposeReducer::reduce(
            state,
            ComposeIntent::GenerationSucceeded {
                generation: 1,
                reply: "Hello!".to_string(),
            },
        );
        assert_eq!(state.phase, ComposePhase::Succeeded);
        assert_eq!(state.generated_reply, "Hello!");
        assert!(!state.is_loading());
    }

    #[test]
    fn failure_sets_generic_message_and_keeps_reply() {
        let mut state = with_content("Hi");
        state.generated_reply = "earlier".to_string();
        let state = ComposeReducer::reduce(state, ComposeIntent::Submit);
        let state = ComposeReducer::reduce(state, ComposeIntent::GenerationFailed { generation: 1 });
        assert_eq!(state.phase, ComposePhase::Failed);
        assert_eq!(state.error, GENERATION_FAILED_MESSAGE);
        assert_eq!(state.generated_reply, "earlier");
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let state = ComposeReducer::reduce(with_content("Hi"), ComposeIntent::Submit);
        let state = ComposeReducer::reduce(
            state,
            ComposeIntent::GenerationSucceeded {
                generation: 1,
                reply: "first".to_string(),
            },
        );
        let state = ComposeReducer::reduce(state, ComposeIntent::Submit);
        let before = state.clone();
        let state = ComposeReducer::reduce(
            state,
            ComposeIntent::GenerationSucceeded {
                generation: 1,
                reply: "late duplicate".to_string(),
            },
        );
        assert_eq!(state, before);
        assert_eq!(state.in_flight_generation(), Some(2));
    }

    #[test]
    fn completion_without_request_is_ignored() {
        let before = with_content("Hi");
        let after = ComposeReducer::reduce(
            before.clone(),
            ComposeIntent::GenerationFailed { generation: 1 },
        );
        assert_eq!(before, after);
    }

    #[test]
    fn animation_tick_only_advances_while_loading() {
        let idle = with_content("Hi");
        assert_eq!(
            ComposeReducer::reduce(idle.clone(), ComposeIntent::AnimationTick),
            idle
        );

        let loading = ComposeReducer::reduce(idle, ComposeIntent::Submit);
        let ticked = ComposeReducer::reduce(loading, ComposeIntent::AnimationTick);
        assert_eq!(ticked.animation_tick(), 1);
    }

    #[test]
    fn editing_is_allowed_while_loading() {
        let state = ComposeReducer::reduce(with_content("Hi"), ComposeIntent::Submit);
        let state = ComposeReducer::reduce(state, ComposeIntent::InsertChar('!'));
        assert_eq!(state.email_content, "Hi!");
        assert!(state.is_loading());
    }

    #[test]
    fn backspace_on_empty_content_is_noop() {
        let state = ComposeReducer::reduce(ComposeState::default(), ComposeIntent::Backspace);
        assert!(state.email_content.is_empty());
    }

    #[test]
    fn paste_normalizes_carriage_returns() {
        let state = ComposeReducer::reduce(
            ComposeState::default(),
            ComposeIntent::Paste("a\r\nb\rc".to_string()),
        );
        assert_eq!(state.email_content, "a\nb\nc");
    }

    #[test]
    fn tone_intents() {
        let state = ComposeReducer::reduce(ComposeState::default(), ComposeIntent::NextTone);
        assert_eq!(state.tone, Tone::Casual);
        let state = ComposeReducer::reduce(state, ComposeIntent::PreviousTone);
        assert_eq!(state.tone, Tone::Professional);
        let state = ComposeReducer::reduce(state, ComposeIntent::SelectTone(Tone::Friendly));
        assert_eq!(state.tone, Tone::Friendly);
    }
}
