// Recording stand-in for the Leaflet map.

#![allow(dead_code)]
use antipode_core::{Bounds, Coordinate, LineStyle, MapSurface, MarkerStyle};

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Marker {
        at: Coordinate,
        title: String,
        popup: String,
        icon_url: String,
    },
    Line([Coordinate; 2]),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Add(u32),
    Remove(u32),
    Fit(Bounds),
}

#[derive(Default)]
pub struct RecordingMap {
    next_id: u32,
    pub live: Vec<(u32, Shape)>,
    pub ops: Vec<Op>,
}

impl RecordingMap {
    fn add(&mut self, shape: Shape) -> u32 {
        self.next_id += 1;
        self.live.push((self.next_id, shape));
        self.ops.push(Op::Add(self.next_id));
        self.next_id
    }

    pub fn markers(&self) -> Vec<(&str, Coordinate)> {
        self.live
            .iter()
            .filter_map(|(_, s)| match s {
                Shape::Marker { at, title, .. } => Some((title.as_str(), *at)),
                Shape::Line(_) => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<[Coordinate; 2]> {
        self.live
            .iter()
            .filter_map(|(_, s)| match s {
                Shape::Line(pts) => Some(*pts),
                Shape::Marker { .. } => None,
            })
            .collect()
    }

    pub fn last_fit(&self) -> Option<Bounds> {
        self.ops.iter().rev().find_map(|op| match op {
            Op::Fit(b) => Some(*b),
            _ => None,
        })
    }

    pub fn adds(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Add(_))).count()
    }
}

impl MapSurface for RecordingMap {
    type Layer = u32;

    fn add_marker(&mut self, at: Coordinate, style: &MarkerStyle) -> u32 {
        self.add(Shape::Marker {
            at,
            title: style.title.clone(),
            popup: style.popup.clone(),
            icon_url: style.icon_url.clone(),
        })
    }

    fn add_line(&mut self, points: [Coordinate; 2], _style: &LineStyle) -> u32 {
        self.add(Shape::Line(points))
    }

    fn remove_layer(&mut self, layer: u32) {
        let before = self.live.len();
        self.live.retain(|(id, _)| *id != layer);
        assert_eq!(before, self.live.len() + 1, "removed unknown layer {layer}");
        self.ops.push(Op::Remove(layer));
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        self.ops.push(Op::Fit(bounds));
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

pub fn approx_coord(a: Coordinate, b: Coordinate) -> bool {
    approx(a.latitude(), b.latitude()) && approx(a.longitude(), b.longitude())
}
