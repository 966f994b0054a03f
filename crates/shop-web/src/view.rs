//! Views and live re-rendering.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use shop_reactive::Subscription;
use tracing::trace;

/// Something that renders to HTML from shared state.
pub trait View {
    /// Render the current state.
    fn render(&self) -> String;

    /// Subscribe `on_change` to every piece of state `render` reads.
    ///
    /// The view stays bound as long as the returned subscriptions live.
    fn bind(&self, on_change: Rc<dyn Fn()>) -> Vec<Subscription>;
}

#[derive(Default)]
struct Rendered {
    html: RefCell<String>,
    renders: Cell<u64>,
}

impl Rendered {
    fn refresh(&self, view: &dyn View) {
        let html = view.render();
        *self.html.borrow_mut() = html;
        self.renders.set(self.renders.get() + 1);
        trace!(renders = self.renders.get(), "view rendered");
    }
}

/// A mounted view that re-renders whenever its bound state changes.
pub struct LiveView<V> {
    view: Rc<V>,
    rendered: Rc<Rendered>,
    _subscriptions: Vec<Subscription>,
}

impl<V: View + 'static> LiveView<V> {
    /// Render `view` once and keep it in sync from then on.
    pub fn mount(view: V) -> Self {
        let view = Rc::new(view);
        let rendered = Rc::new(Rendered::default());
        rendered.refresh(view.as_ref());

        let on_change: Rc<dyn Fn()> = {
            let view = Rc::downgrade(&view);
            let rendered = Rc::downgrade(&rendered);
            Rc::new(move || {
                if let (Some(view), Some(rendered)) = (view.upgrade(), rendered.upgrade()) {
                    rendered.refresh(view.as_ref());
                }
            })
        };
        let subscriptions = view.bind(on_change);

        Self {
            view,
            rendered,
            _subscriptions: subscriptions,
        }
    }

    /// HTML from the latest render.
    pub fn html(&self) -> String {
        self.rendered.html.borrow().clone()
    }

    /// How many times the view has rendered, including the first.
    pub fn render_count(&self) -> u64 {
        self.rendered.renders.get()
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_reactive::Observable;

    struct Counter {
        count: Observable<u32>,
    }

    impl View for Counter {
        fn render(&self) -> String {
            format!("<span>{}</span>", self.count.get())
        }

        fn bind(&self, on_change: Rc<dyn Fn()>) -> Vec<Subscription> {
            vec![self.count.subscribe(move |_| on_change())]
        }
    }

    #[test]
    fn test_mount_renders_once() {
        let live = LiveView::mount(Counter {
            count: Observable::new(0),
        });
        assert_eq!(live.html(), "<span>0</span>");
        assert_eq!(live.render_count(), 1);
    }

    #[test]
    fn test_rerenders_on_change() {
        let count = Observable::new(0);
        let live = LiveView::mount(Counter {
            count: count.clone(),
        });

        count.set(3);

        assert_eq!(live.html(), "<span>3</span>");
        assert_eq!(live.render_count(), 2);
    }

    #[test]
    fn test_drop_unbinds() {
        let count = Observable::new(0);
        let live = LiveView::mount(Counter {
            count: count.clone(),
        });
        assert_eq!(count.subscriber_count(), 1);

        drop(live);
        count.set(1);

        assert_eq!(count.subscriber_count(), 0);
    }
}
