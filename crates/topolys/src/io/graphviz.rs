//! Graphviz dump of the entity graph

use std::fmt::{self, Write};

use crate::entity::Topology;
use crate::model::Model;

impl Model {
    /// Write a `digraph` with one node per entity and an arrow from each
    /// entity to every parent that references it
    pub fn write_graphviz<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "digraph model {{")?;
        writeln!(out, "  rankdir=BT;")?;

        for (i, v) in self.vertices.iter().enumerate() {
            let id = self.vertex_id(i);
            let p = v.point();
            writeln!(out, "  {id} [shape=point, xlabel=\"{id} ({}, {}, {})\"];", p.x, p.y, p.z)?;
            for edge in v.parents() {
                writeln!(out, "  {id} -> {edge};")?;
            }
        }
        for (i, e) in self.edges.iter().enumerate() {
            let id = self.edge_id(i);
            writeln!(out, "  {id} [shape=box, label=\"{id}\\n{:.3}\"];", e.length())?;
            for de in e.parents() {
                writeln!(out, "  {id} -> {de};")?;
            }
        }
        for (i, de) in self.directed_edges.iter().enumerate() {
            let id = self.directed_edge_id(i);
            let arrow = if de.inverted() { "-" } else { "+" };
            writeln!(out, "  {id} [shape=box, label=\"{id} {arrow}\"];")?;
            for wire in de.parents() {
                writeln!(out, "  {id} -> {wire};")?;
            }
        }
        for (i, w) in self.wires.iter().enumerate() {
            let id = self.wire_id(i);
            writeln!(out, "  {id} [shape=ellipse];")?;
            for face in w.parents() {
                writeln!(out, "  {id} -> {face};")?;
            }
        }
        for (i, f) in self.faces.iter().enumerate() {
            let id = self.face_id(i);
            writeln!(out, "  {id} [shape=doublecircle];")?;
            for shell in f.parents() {
                writeln!(out, "  {id} -> {shell};")?;
            }
        }
        for i in 0..self.shells.len() {
            writeln!(out, "  {} [shape=house];", self.shell_id(i))?;
        }

        writeln!(out, "}}")
    }

    pub fn to_graphviz(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_graphviz(&mut out);
        out
    }
}
