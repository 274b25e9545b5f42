//! Recording host shared by the integration suites.

#![allow(dead_code)]

use tabpager_core::Rect;
use tabpager_layout::{Dequeue, PagerConfig, PagerHost, PagerItem, PagerLayout};

pub const PAGE_WIDTH: f64 = 100.0;
pub const PAGE_HEIGHT: f64 = 200.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Fetch { index: usize, prefetching: bool },
    Attach(usize),
    Detach(usize),
    Transition { from: Option<usize>, to: usize, animated: bool },
    Progress { from: usize, to: usize, progress: f64 },
    DidScroll,
}

/// Host whose pages are plain indices tagged with a build serial.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub count: usize,
    pub reuse_identifier: Option<&'static str>,
    pub tracks_progress: bool,
    pub events: Vec<Event>,
}

impl RecordingHost {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn fetches(&self) -> Vec<(usize, bool)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Fetch { index, prefetching } => Some((*index, *prefetching)),
                _ => None,
            })
            .collect()
    }

    pub fn attaches(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Attach(index) => Some(*index),
                _ => None,
            })
            .collect()
    }

    pub fn detaches(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Detach(index) => Some(*index),
                _ => None,
            })
            .collect()
    }

    pub fn transitions(&self) -> Vec<(Option<usize>, usize, bool)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Transition { from, to, animated } => Some((*from, *to, *animated)),
                _ => None,
            })
            .collect()
    }

    pub fn progress(&self) -> Vec<(usize, usize, f64)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Progress { from, to, progress } => Some((*from, *to, *progress)),
                _ => None,
            })
            .collect()
    }

    pub fn mount_events(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, Event::Attach(_) | Event::Detach(_)))
            .count()
    }
}

impl PagerHost<usize> for RecordingHost {
    fn item_count(&self) -> usize {
        self.count
    }

    fn item(
        &mut self,
        index: usize,
        prefetching: bool,
        reuse: &mut Dequeue<'_, usize>,
    ) -> PagerItem<usize> {
        self.events.push(Event::Fetch { index, prefetching });
        match self.reuse_identifier {
            Some(identifier) => reuse.dequeue(identifier, index),
            None => PagerItem::new(index),
        }
    }

    fn attach(&mut self, _item: &mut PagerItem<usize>, index: usize) {
        self.events.push(Event::Attach(index));
    }

    fn detach(&mut self, _item: &mut PagerItem<usize>, index: usize) {
        self.events.push(Event::Detach(index));
    }

    fn tracks_progress(&self) -> bool {
        self.tracks_progress
    }

    fn transition(&mut self, from: Option<usize>, to: usize, animated: bool) {
        self.events.push(Event::Transition { from, to, animated });
    }

    fn transition_progress(&mut self, from: usize, to: usize, progress: f64) {
        self.events.push(Event::Progress { from, to, progress });
    }

    fn did_scroll(&mut self) {
        self.events.push(Event::DidScroll);
    }
}

/// A loaded engine sized to one 100x200 page.
pub fn loaded(host: &mut RecordingHost, config: PagerConfig) -> PagerLayout<usize> {
    let mut layout = PagerLayout::with_config(config).expect("valid config");
    layout.register("X", |index| index);
    layout.set_frame(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT), host);
    layout.reload_data(host);
    layout
}
