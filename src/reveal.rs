//! First-sight reveal bookkeeping for scroll-animated sections.
//!
//! Each watched element reveals once. The observer hands back a [`Reveal`]
//! describing what to paint; the caller applies it and stops observing the
//! element. Entries for elements that already revealed, or that were never
//! registered, produce nothing.

use crate::config::RevealOptions;

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// One entry from an intersection batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection<N> {
    pub target: N,
    pub is_intersecting: bool,
}

/// A stagger child and the transition delay it gets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaggeredChild<N> {
    pub node: N,
    pub delay_ms: u32,
}

impl<N> StaggeredChild<N> {
    /// CSS `transition-delay` value.
    #[must_use]
    pub fn delay_style(&self) -> String {
        format!("{}ms", self.delay_ms)
    }
}

/// Paint instructions for one element crossing into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal<N> {
    pub target: N,
    pub children: Vec<StaggeredChild<N>>,
}

#[derive(Debug, Clone)]
struct WatchedElement<N> {
    node: N,
    stagger: Vec<N>,
    revealed: bool,
}

/// Tracks watched elements and their one-way revealed flag.
#[derive(Debug, Clone)]
pub struct RevealObserver<N> {
    watched: Vec<WatchedElement<N>>,
    options: RevealOptions,
}

impl<N: Clone + PartialEq> RevealObserver<N> {
    #[must_use]
    pub fn new(options: RevealOptions) -> Self {
        Self { watched: Vec::new(), options }
    }

    #[must_use]
    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Start watching `node` with its stagger children in document order.
    ///
    /// Returns `false` if the node is already known, revealed or not.
    pub fn register(&mut self, node: N, stagger: Vec<N>) -> bool {
        if self.watched.iter().any(|w| w.node == node) {
            return false;
        }
        self.watched.push(WatchedElement { node, stagger, revealed: false });
        true
    }

    /// Whether `node` has revealed.
    #[must_use]
    pub fn is_revealed(&self, node: &N) -> bool {
        self.watched.iter().any(|w| &w.node == node && w.revealed)
    }

    /// Elements still waiting to come into view.
    pub fn pending(&self) -> impl Iterator<Item = &N> {
        self.watched.iter().filter(|w| !w.revealed).map(|w| &w.node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.watched.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }

    /// Process one intersection batch.
    ///
    /// Entries are handled independently; their order within the batch does
    /// not matter.
    pub fn on_entries<I>(&mut self, entries: I) -> Vec<Reveal<N>>
    where
        I: IntoIterator<Item = Intersection<N>>,
    {
        let mut reveals = Vec::new();
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            let Some(watched) = self
                .watched
                .iter_mut()
                .find(|w| w.node == entry.target && !w.revealed)
            else {
                continue;
            };
            watched.revealed = true;

            let children = watched
                .stagger
                .iter()
                .enumerate()
                .map(|(index, node)| StaggeredChild {
                    node: node.clone(),
                    delay_ms: stagger_delay_ms(&self.options, index),
                })
                .collect::<Vec<_>>();
            log::debug!("reveal: element with {} stagger children", children.len());
            reveals.push(Reveal { target: watched.node.clone(), children });
        }
        reveals
    }
}

/// Transition delay for the stagger child at `index`: `index * step + base`.
#[must_use]
pub fn stagger_delay_ms(options: &RevealOptions, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    index
        .saturating_mul(options.stagger_step_ms)
        .saturating_add(options.stagger_base_ms)
}
