use std::future::Future;

use dioxus::prelude::*;
use store::{Loadable, RequestGeneration};

use crate::components::{use_toast, ToastOptions};

/// Run `fetch` on mount and whenever a signal it reads changes, tracking the
/// result as a [`Loadable`].
///
/// Each run takes a ticket from a [`RequestGeneration`]; a response that
/// arrives after a newer run has started is dropped. Failures are logged and
/// announced with `failure_message`.
pub fn use_loader<T, F, Fut>(failure_message: &'static str, mut fetch: F) -> Signal<Loadable<T>>
where
    T: 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Loadable<T>> + 'static,
{
    let mut state = use_signal(|| Loadable::Loading);
    let generation = use_hook(RequestGeneration::new);
    let toast = use_toast();

    let _ = use_resource(move || {
        let generation = generation.clone();
        let ticket = generation.begin();
        let request = fetch();
        async move {
            state.set(Loadable::Loading);
            let result = request.await;
            if let Loadable::Failed(reason) = &result {
                tracing::error!("{failure_message}: {reason}");
                if generation.is_current(ticket) {
                    toast.error(failure_message.to_string(), ToastOptions::new());
                }
            }
            generation.settle(ticket, &mut *state.write(), result);
        }
    });

    state
}
