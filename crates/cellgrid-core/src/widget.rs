#![forbid(unsafe_code)]

//! Widget capability and generational widget storage.
//!
//! Layouts never hold references to widgets. They hold [`WidgetId`]s handed out
//! by a [`WidgetArena`] and resolve them at layout time. Removing a widget bumps
//! its slot generation, so an id kept by a layout after removal resolves to
//! `None` instead of silently pointing at whatever reuses the slot.

use crate::geometry::Rect;

/// Something a layout can position.
///
/// The natural size is the widget's current size: layouts move widgets but
/// never resize them.
pub trait Widget {
    /// Current bounds.
    fn rect(&self) -> Rect;

    /// Replace the current bounds.
    fn set_rect(&mut self, rect: Rect);

    /// Natural width.
    fn width(&self) -> f64 {
        self.rect().width
    }

    /// Natural height.
    fn height(&self) -> f64 {
        self.rect().height
    }
}

impl Widget for Rect {
    fn rect(&self) -> Rect {
        *self
    }

    fn set_rect(&mut self, rect: Rect) {
        *self = rect;
    }
}

/// Stable handle to a widget stored in a [`WidgetArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId {
    index: u32,
    generation: u32,
}

impl WidgetId {
    /// Slot index inside the arena.
    #[inline]
    pub fn index(self) -> u32 {
        self.index
    }

    /// Generation of the slot when this id was issued.
    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Clone)]
struct Slot<W> {
    generation: u32,
    value: Option<W>,
}

/// Generational arena owning widget records.
#[derive(Debug, Clone)]
pub struct WidgetArena<W> {
    slots: Vec<Slot<W>>,
    free: Vec<u32>,
    len: usize,
}

impl<W> Default for WidgetArena<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> WidgetArena<W> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Create an empty arena with room for `capacity` widgets.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Store a widget and return its id.
    pub fn insert(&mut self, widget: W) -> WidgetId {
        if let Some(index) = self.free.pop() {
            self.len += 1;
            let slot = &mut self.slots[index as usize];
            slot.value = Some(widget);
            return WidgetId {
                index,
                generation: slot.generation,
            };
        }
        let Ok(index) = u32::try_from(self.slots.len()) else {
            panic!("widget arena is full");
        };
        self.slots.push(Slot {
            generation: 0,
            value: Some(widget),
        });
        self.len += 1;
        WidgetId {
            index,
            generation: 0,
        }
    }

    pub fn get(&self, id: WidgetId) -> Option<&W> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.value.as_ref()
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut W> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.value.as_mut()
    }

    /// Remove a widget, invalidating every copy of `id`.
    pub fn remove(&mut self, id: WidgetId) -> Option<W> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        #[cfg(feature = "tracing")]
        crate::logging::trace!(
            index = id.index,
            generation = slot.generation,
            "widget slot freed"
        );
        self.free.push(id.index);
        self.len -= 1;
        Some(value)
    }

    #[inline]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.get(id).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate live widgets in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (WidgetId, &W)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.value.as_ref().map(|w| {
                (
                    WidgetId {
                        index: i as u32,
                        generation: slot.generation,
                    },
                    w,
                )
            })
        })
    }
}

impl<W> std::ops::Index<WidgetId> for WidgetArena<W> {
    type Output = W;

    fn index(&self, id: WidgetId) -> &W {
        match self.get(id) {
            Some(w) => w,
            None => panic!("stale or unknown widget id {id:?}"),
        }
    }
}
