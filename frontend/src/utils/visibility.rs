use std::cell::RefCell;
use std::rc::{Rc, Weak};

use thiserror::Error;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Node,
};

/// Identity of an observed element, assigned by whoever subscribes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementKey(pub usize);

/// One element's visibility as reported in a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEntry {
    pub key: ElementKey,
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl VisibilityEntry {
    /// True when the element has come into view by at least `threshold`.
    pub fn entered(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

#[derive(Error, Debug)]
pub enum VisibilityError {
    #[error("Visibility observer unavailable: {0}")]
    Unavailable(String),
    #[error("Element {0:?} is already observed")]
    AlreadyObserved(ElementKey),
}

impl VisibilityError {
    fn from_js(value: JsValue) -> Self {
        VisibilityError::Unavailable(format!("{:?}", value))
    }
}

/// Anything that can report when subscribed elements cross a visibility threshold.
/// Dropping the returned handle ends the subscription.
pub trait VisibilitySource {
    type Target;
    type Handle;

    fn subscribe(&self, key: ElementKey, target: &Self::Target)
        -> Result<Self::Handle, VisibilityError>;
}

type Targets = Rc<RefCell<Vec<(ElementKey, Element)>>>;

/// Browser implementation backed by a single `IntersectionObserver`.
/// Dropping it disconnects the observer.
pub struct IntersectionSource {
    observer: IntersectionObserver,
    targets: Targets,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl IntersectionSource {
    pub fn new<F>(threshold: f64, on_batch: F) -> Result<Self, VisibilityError>
    where
        F: Fn(Vec<VisibilityEntry>) + 'static,
    {
        let targets: Targets = Rc::new(RefCell::new(Vec::new()));
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new({
            let targets = targets.clone();
            move |entries: Array, _observer: IntersectionObserver| {
                let batch = {
                    let targets = targets.borrow();
                    entries
                        .iter()
                        .filter_map(|value| {
                            let entry: IntersectionObserverEntry = value.dyn_into().ok()?;
                            let target: Node = entry.target().into();
                            // Elements unsubscribed before this batch was delivered are skipped.
                            let (key, _) = targets
                                .iter()
                                .find(|(_, element)| element.is_same_node(Some(&target)))?;
                            Some(VisibilityEntry {
                                key: *key,
                                ratio: entry.intersection_ratio(),
                                is_intersecting: entry.is_intersecting(),
                            })
                        })
                        .collect::<Vec<_>>()
                };
                on_batch(batch);
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(VisibilityError::from_js)?;

        Ok(Self {
            observer,
            targets,
            _callback: callback,
        })
    }
}

impl VisibilitySource for IntersectionSource {
    type Target = Element;
    type Handle = IntersectionSubscription;

    fn subscribe(
        &self,
        key: ElementKey,
        target: &Element,
    ) -> Result<IntersectionSubscription, VisibilityError> {
        {
            let mut targets = self.targets.borrow_mut();
            if targets.iter().any(|(existing, _)| *existing == key) {
                return Err(VisibilityError::AlreadyObserved(key));
            }
            targets.push((key, target.clone()));
        }
        self.observer.observe(target);
        Ok(IntersectionSubscription {
            observer: self.observer.clone(),
            targets: Rc::downgrade(&self.targets),
            key,
            element: target.clone(),
        })
    }
}

impl Drop for IntersectionSource {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.targets.borrow_mut().clear();
    }
}

pub struct IntersectionSubscription {
    observer: IntersectionObserver,
    targets: Weak<RefCell<Vec<(ElementKey, Element)>>>,
    key: ElementKey,
    element: Element,
}

impl Drop for IntersectionSubscription {
    fn drop(&mut self) {
        self.observer.unobserve(&self.element);
        if let Some(targets) = self.targets.upgrade() {
            targets.borrow_mut().retain(|(key, _)| *key != self.key);
        }
    }
}
