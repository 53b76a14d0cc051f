//! Marker and line placement on top of an abstract map.
//!
//! The renderer owns the map handle and the single active `MarkerSet`.
//! Every render removes the previous set before adding the new one, so the
//! map never holds more than one self marker, one antipode marker and one
//! connecting line.

use crate::config::{LineStyle, MarkerStyle, WidgetConfig};
use crate::geo::{antipode, Bounds, Coordinate};

/// The slice of a tile-map library the renderer relies on.
pub trait MapSurface {
    /// Opaque handle for something added to the map.
    type Layer;

    fn add_marker(&mut self, at: Coordinate, style: &MarkerStyle) -> Self::Layer;
    fn add_line(&mut self, points: [Coordinate; 2], style: &LineStyle) -> Self::Layer;
    fn remove_layer(&mut self, layer: Self::Layer);
    fn fit_bounds(&mut self, bounds: Bounds);
}

/// Layers placed by one render.
#[derive(Debug)]
pub struct MarkerSet<L> {
    pub self_marker: L,
    pub antipode_marker: L,
    pub line: L,
}

/// Where the last render put things.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub location: Coordinate,
    pub antipode: Coordinate,
    pub bounds: Bounds,
}

pub struct Renderer<M: MapSurface> {
    map: M,
    active: Option<MarkerSet<M::Layer>>,
    self_style: MarkerStyle,
    antipode_style: MarkerStyle,
    line_style: LineStyle,
}

impl<M: MapSurface> Renderer<M> {
    pub fn new(map: M, config: &WidgetConfig) -> Self {
        Self {
            map,
            active: None,
            self_style: config.self_marker.clone(),
            antipode_style: config.antipode_marker.clone(),
            line_style: config.line.clone(),
        }
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn has_markers(&self) -> bool {
        self.active.is_some()
    }

    /// Replace whatever is on the map with markers for `at` and its antipode.
    ///
    /// Assumes a finite coordinate with a signed longitude; nothing is
    /// validated here.
    pub fn render(&mut self, at: Coordinate) -> Placement {
        let anti = antipode(at);
        self.clear();

        let self_marker = self.map.add_marker(at, &self.self_style);
        let antipode_marker = self.map.add_marker(anti, &self.antipode_style);
        let line = self.map.add_line([at, anti], &self.line_style);
        self.active = Some(MarkerSet {
            self_marker,
            antipode_marker,
            line,
        });

        let bounds = Bounds::around(at, anti);
        self.map.fit_bounds(bounds);
        log::info!(
            "[render] self=({:.5},{:.5}) antipode=({:.5},{:.5})",
            at.latitude(),
            at.longitude(),
            anti.latitude(),
            anti.longitude()
        );
        Placement {
            location: at,
            antipode: anti,
            bounds,
        }
    }

    /// Remove the active set, if any.
    pub fn clear(&mut self) {
        if let Some(set) = self.active.take() {
            self.map.remove_layer(set.self_marker);
            self.map.remove_layer(set.antipode_marker);
            self.map.remove_layer(set.line);
        }
    }
}
