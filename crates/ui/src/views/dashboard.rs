use std::sync::Arc;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use learnify_core::FactSession;
use learnify_core::model::Topic;
use services::DashboardSnapshot;

use crate::context::AppContext;
use crate::views::{
    Header, ProgressPanel, TopicGrid, TopicModal, ViewError, ViewState, WeeklyGoalCard,
    view_state_from_resource,
};
use crate::vm::FactModalVm;

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let dashboard = ctx.dashboard();
    let facts = ctx.facts();

    let resource = use_resource(move || {
        let dashboard = Arc::clone(&dashboard);
        async move {
            dashboard.load().await.map_err(|err| {
                tracing::error!(error = %err, "failed to load dashboard");
                ViewError::Unknown
            })
        }
    });
    let state = view_state_from_resource(resource);
    let session = use_signal(FactSession::new);

    let on_select = use_callback(move |topic: Topic| {
        let mut session = session;
        tracing::debug!(topic = topic.title(), "opened topic");
        session.write().select(topic);
    });
    let on_close = use_callback(move |()| {
        let mut session = session;
        session.write().close();
    });
    let on_generate = use_callback(move |()| {
        let mut session = session;
        let Some(request) = session.write().begin_generate() else {
            return;
        };
        let facts = Arc::clone(&facts);
        spawn(async move {
            let outcome = facts.fetch_outcome(&request.topic).await;
            if !session.write().complete(request.ticket, outcome) {
                tracing::debug!(
                    ticket = request.ticket.value(),
                    "dropped fun fact for a closed or superseded request"
                );
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DashboardTestHandles>() {
                handles.register(on_select, on_close, on_generate, session);
            }
        }
    }

    let modal = FactModalVm::from_session(&session.read());

    rsx! {
        match state {
            ViewState::Idle | ViewState::Loading => rsx! {
                p { class: "dashboard-status", "Loading..." }
            },
            ViewState::Error(err) => rsx! {
                div { class: "dashboard-error",
                    p { "{err.message()}" }
                    button {
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                }
            },
            ViewState::Ready(snapshot) => rsx! {
                DashboardPage { snapshot, on_select }
            },
        }
        if let Some(modal) = modal {
            TopicModal { modal, on_close, on_generate }
        }
    }
}

#[component]
fn DashboardPage(snapshot: DashboardSnapshot, on_select: Callback<Topic>) -> Element {
    let DashboardSnapshot {
        profile,
        topics,
        progress,
        goal,
        trend_percent,
    } = snapshot;

    rsx! {
        Header {
            avatar_initials: profile.avatar_initials().to_string(),
            learner_name: profile.name().to_string(),
        }
        main { class: "dashboard",
            section { class: "welcome",
                h1 { "Welcome Back, {profile.name()}!" }
                p { "Ready for a new adventure in learning?" }
            }
            div { class: "dashboard__columns",
                div { class: "dashboard__main",
                    TopicGrid { topics, on_select }
                    WeeklyGoalCard { goal, trend_percent }
                }
                aside { class: "dashboard__side",
                    ProgressPanel { items: progress }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DashboardTestHandles {
    select: Rc<RefCell<Option<Callback<Topic>>>>,
    close: Rc<RefCell<Option<Callback<()>>>>,
    generate: Rc<RefCell<Option<Callback<()>>>>,
    session: Rc<RefCell<Option<Signal<FactSession>>>>,
}

#[cfg(test)]
impl DashboardTestHandles {
    pub(crate) fn register(
        &self,
        select: Callback<Topic>,
        close: Callback<()>,
        generate: Callback<()>,
        session: Signal<FactSession>,
    ) {
        *self.select.borrow_mut() = Some(select);
        *self.close.borrow_mut() = Some(close);
        *self.generate.borrow_mut() = Some(generate);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn select(&self) -> Callback<Topic> {
        (*self.select.borrow()).expect("select registered")
    }

    pub(crate) fn close(&self) -> Callback<()> {
        (*self.close.borrow()).expect("close registered")
    }

    pub(crate) fn generate(&self) -> Callback<()> {
        (*self.generate.borrow()).expect("generate registered")
    }

    pub(crate) fn session(&self) -> Signal<FactSession> {
        (*self.session.borrow()).expect("session registered")
    }
}
