use crate::board::board::Board;
use crate::board::collectible::{Collectible, CollectibleKind};
use crate::board::node::Node;
use crate::direction::Direction;
use crate::error::{Result, SimError};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Line-oriented map format:
///
/// ```text
/// A 0 0 right=B
/// B 1 0 left=A up=C
/// C 1 1 down=B
/// pellet 1 0
/// super 1 1
/// ```
///
/// A node line is `name x y` followed by `direction=name` pairs.
/// `pellet` and `super` are reserved words introducing collectible markers.
/// Every edge destination must be declared on its own line (it needs a cell).
pub fn parse_board(path: &str) -> Result<Board> {
    let file = File::open(path)?;
    let reader = BufReader::with_capacity(64 * 1024, file);
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    parse_lines(lines.iter().map(|s| s.as_str()))
}

/// Parse a board directly from an in-memory string
pub fn parse_board_from_str(src: &str) -> Result<Board> {
    parse_lines(src.lines())
}

fn parse_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Result<Board> {
    let mut names: Vec<String> = Vec::new();
    let mut name_to_id: HashMap<String, u32> = HashMap::new();
    let mut nodes: Vec<Node> = Vec::new();
    let mut edges: Vec<(u32, Direction, String)> = Vec::new();
    let mut collectibles: Vec<Collectible> = Vec::new();

    for raw in lines {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let head = parts
            .next()
            .ok_or_else(|| SimError::InvalidLine("missing node name".to_string()))?;

        // Collectible lines share the node-line shape minus the edges
        let kind = match head {
            "pellet" => Some(CollectibleKind::Pellet),
            "super" => Some(CollectibleKind::SuperPellet),
            _ => None,
        };
        if let Some(kind) = kind {
            let cell = parse_cell(&mut parts, line)?;
            collectibles.push(Collectible::new(cell, kind));
            continue;
        }

        let cell = parse_cell(&mut parts, line)?;
        if name_to_id.contains_key(head) {
            return Err(SimError::InvalidLine(format!(
                "duplicate node '{}'",
                head
            )));
        }
        let src_id = names.len() as u32;
        name_to_id.insert(head.to_string(), src_id);
        names.push(head.to_string());
        nodes.push(Node::new(src_id, cell));

        for kv in parts {
            if let Some(eq) = kv.find('=') {
                let dir: Direction = kv[..eq].parse()?;
                edges.push((src_id, dir, kv[eq + 1..].to_string()));
            } else {
                return Err(SimError::InvalidLine(format!(
                    "expected direction=name, got '{}'",
                    kv
                )));
            }
        }
    }

    for (src, dir, dst_name) in &edges {
        let dst = *name_to_id.get(dst_name).ok_or_else(|| {
            SimError::InvalidLine(format!("edge to undeclared node '{}'", dst_name))
        })?;
        nodes[*src as usize].set_neighbor(*dir, dst);
    }

    Ok(Board::new(names, nodes, collectibles))
}

fn parse_cell<'a>(parts: &mut impl Iterator<Item = &'a str>, line: &str) -> Result<(i32, i32)> {
    let x = parts
        .next()
        .and_then(|t| t.parse::<i32>().ok())
        .ok_or_else(|| SimError::InvalidLine(format!("missing x coordinate: {}", line)))?;
    let y = parts
        .next()
        .and_then(|t| t.parse::<i32>().ok())
        .ok_or_else(|| SimError::InvalidLine(format!("missing y coordinate: {}", line)))?;
    Ok((x, y))
}
