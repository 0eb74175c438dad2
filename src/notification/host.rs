use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::notification::toast::{Notification, Presenter, Timer, ToastId, ToastStep, ToastTimings};

/// Handle for showing a notification from anywhere below a `NotificationHost`.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    show: Callback<Notification>,
}

impl Notifier {
    pub fn show(&self, notification: Notification) {
        self.show.emit(notification);
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationHostProps {
    #[prop_or_default]
    pub timings: ToastTimings,
    #[prop_or_default]
    pub children: Children,
}

pub enum NotificationHostMsg {
    Show(Notification),
    Step(ToastId, ToastStep),
    Dismiss(ToastId),
}

pub struct NotificationHost {
    presenter: Presenter,
    // Dropping a Timeout cancels it.
    timers: Vec<Timeout>,
    notifier: Notifier,
}

impl NotificationHost {
    fn arm(&mut self, ctx: &Context<Self>, timer: Timer) {
        let link = ctx.link().clone();
        self.timers.push(Timeout::new(timer.after_ms, move || {
            link.send_message(NotificationHostMsg::Step(timer.id, timer.step));
        }));
    }
}

impl Component for NotificationHost {
    type Message = NotificationHostMsg;
    type Properties = NotificationHostProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            presenter: Presenter::new(ctx.props().timings),
            timers: Vec::new(),
            notifier: Notifier {
                show: ctx.link().callback(NotificationHostMsg::Show),
            },
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.presenter.set_timings(ctx.props().timings);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            NotificationHostMsg::Show(notification) => {
                debug!("Showing {:?} notification", notification.kind);
                self.timers.clear();
                for timer in self.presenter.show(notification) {
                    self.arm(ctx, timer);
                }
                true
            }
            NotificationHostMsg::Step(id, step) => {
                // Fired handles are left in place and dropped on the next show.
                if let Some(next) = self.presenter.advance(id, step) {
                    self.arm(ctx, next);
                }
                true
            }
            NotificationHostMsg::Dismiss(id) => match self.presenter.dismiss(id) {
                Some(remove) => {
                    self.timers.clear();
                    self.arm(ctx, remove);
                    true
                }
                None => false,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<Notifier> context={self.notifier.clone()}>
                { for ctx.props().children.iter() }
                if let Some(toast) = self.presenter.current() {
                    <div
                        key={format!("toast-{:?}", toast.id)}
                        class={toast.notification.kind.class()}
                        role="status"
                        style={toast.style()}
                        onclick={
                            let id = toast.id;
                            ctx.link().callback(move |_: MouseEvent| NotificationHostMsg::Dismiss(id))
                        }
                    >
                        { &toast.notification.text }
                    </div>
                }
            </ContextProvider<Notifier>>
        }
    }
}
