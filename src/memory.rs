//! An in-memory element tree implementing [`SwipeHost`].
//!
//! Used by [`crate::SwipeStack`] to hold card state between egui frames, and handy for driving a
//! controller without any UI at all.

use crate::{
    event::PointerPhase,
    host::{InlineStyle, ListenerTarget, SwipeHost},
    Result, SwipeError,
};
use std::collections::{BTreeMap, HashSet};

/// Handle to an element stored in a [`MemoryHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default, Clone)]
pub struct MemoryHost {
    containers: BTreeMap<String, Vec<NodeId>>,
    styles: Vec<InlineStyle>,
    listeners: HashSet<(ListenerTarget<NodeId>, PointerPhase)>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a container reachable under `selector` holding `count` fresh children, and returns
    /// their ids. Replaces any container previously registered under the same selector.
    pub fn add_container(&mut self, selector: impl Into<String>, count: usize) -> Vec<NodeId> {
        let children = (0..count)
            .map(|_| {
                self.styles.push(InlineStyle::default());
                NodeId(self.styles.len() - 1)
            })
            .collect::<Vec<_>>();
        self.containers.insert(selector.into(), children.clone());
        children
    }

    /// Number of listeners currently registered on `element`.
    pub fn listener_count(&self, element: NodeId) -> usize {
        self.listeners
            .iter()
            .filter(|(target, _)| *target == ListenerTarget::Element(element))
            .count()
    }
}

impl SwipeHost for MemoryHost {
    type Element = NodeId;

    fn children(&self, selector: &str) -> Result<Vec<NodeId>> {
        self.containers
            .get(selector)
            .cloned()
            .ok_or_else(|| SwipeError::ContainerNotFound(selector.to_owned()))
    }

    fn style(&self, element: &NodeId) -> InlineStyle {
        self.styles.get(element.0).copied().unwrap_or_default()
    }

    fn set_style(&mut self, element: &NodeId, style: InlineStyle) {
        if let Some(slot) = self.styles.get_mut(element.0) {
            *slot = style;
        }
    }

    fn subscribe(&mut self, target: ListenerTarget<NodeId>, phase: PointerPhase) {
        self.listeners.insert((target, phase));
    }

    fn unsubscribe(&mut self, target: &ListenerTarget<NodeId>, phase: PointerPhase) {
        self.listeners.remove(&(target.clone(), phase));
    }

    fn is_subscribed(&self, target: &ListenerTarget<NodeId>, phase: PointerPhase) -> bool {
        self.listeners.contains(&(target.clone(), phase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Display;

    #[test]
    fn unknown_selector_is_an_error() {
        let host = MemoryHost::new();
        let err = host.children("#missing").unwrap_err();
        assert!(matches!(err, SwipeError::ContainerNotFound(selector) if selector == "#missing"));
    }

    #[test]
    fn children_keep_document_order() {
        let mut host = MemoryHost::new();
        let ids = host.add_container(".swipe", 3);
        assert_eq!(host.children(".swipe").unwrap(), ids);
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn subscribing_twice_registers_once() {
        let mut host = MemoryHost::new();
        let ids = host.add_container(".swipe", 1);
        let target = ListenerTarget::Element(ids[0]);

        host.subscribe(target.clone(), PointerPhase::Down);
        host.subscribe(target.clone(), PointerPhase::Down);
        assert_eq!(host.listener_count(ids[0]), 1);

        host.unsubscribe(&target, PointerPhase::Down);
        assert!(!host.is_subscribed(&target, PointerPhase::Down));
    }

    #[test]
    fn styles_are_per_element() {
        let mut host = MemoryHost::new();
        let ids = host.add_container(".swipe", 2);
        host.set_style(
            &ids[1],
            InlineStyle {
                display: Some(Display::Block),
                ..Default::default()
            },
        );
        assert!(host.style(&ids[0]).is_unset());
        assert_eq!(host.style(&ids[1]).display, Some(Display::Block));
    }
}
