//! Self-contained interactive graph page generation.
//!
//! Everything is inlined — styles, script, data — so the page works from a
//! `file://` URL with no network access. Nodes show their label and expose
//! the note's absolute path as a native hover tooltip; edges are directed.

use notegraph_core::GraphDocument;

/// Render the graph document into a complete HTML page.
///
/// Edges with dangling endpoints are dropped before embedding; the page
/// script filters once more on load.
pub fn render_page(doc: &GraphDocument) -> String {
    let nodes: Vec<serde_json::Value> = doc
        .nodes
        .iter()
        .map(|n| {
            serde_json::json!({
                "id": n.id,
                "label": n.label,
                "title": n.path,
            })
        })
        .collect();
    let edges: Vec<serde_json::Value> = doc
        .resolved_edges()
        .iter()
        .map(|e| {
            serde_json::json!({
                "from": e.from,
                "to": e.to,
            })
        })
        .collect();

    let data = serde_json::json!({ "nodes": nodes, "edges": edges });
    let payload = escape_for_script(&data.to_string());
    PAGE_TEMPLATE.replace("__GRAPH_DATA__", &payload)
}

/// Keep embedded note content from terminating the inline script element.
/// `<\/` is a valid JSON escape for `</`.
fn escape_for_script(json: &str) -> String {
    json.replace("</", "<\\/")
}

const PAGE_TEMPLATE: &str = r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>notegraph</title>
<style>
  html, body {
    margin: 0; padding: 0; height: 100%; overflow: hidden;
    background: #222222; color: #ffffff;
    font-family: Inter, system-ui, sans-serif;
  }
  svg { width: 100vw; height: 100vh; display: block; cursor: grab; }
  svg.panning { cursor: grabbing; }
  .edge { stroke: rgba(255, 255, 255, 0.2); stroke-width: 1; }
  .node circle { fill: #7c3aed; stroke: #8b5cf6; stroke-width: 1; cursor: pointer; }
  .node circle:hover { fill: #a855f7; stroke: #c084fc; }
  .node text { fill: #ffffff; font-size: 10px; pointer-events: none; }
</style>
</head>
<body>
<svg id="scene">
  <defs>
    <marker id="arrow" viewBox="0 0 10 10" refX="9" refY="5"
            markerWidth="6" markerHeight="6" orient="auto-start-reverse">
      <path d="M 0 0 L 10 5 L 0 10 z" fill="rgba(255, 255, 255, 0.35)"></path>
    </marker>
  </defs>
  <g id="edges"></g>
  <g id="nodes"></g>
</svg>
<script>
const GRAPH = __GRAPH_DATA__;

const physics = {
  gravitationalConstant: -2000,
  centralGravity: 0.05,
  springLength: 100,
  springConstant: 0.04,
  damping: 0.05,
  maxVelocity: 30,
  timestep: 0.35,
};
const NODE_RADIUS = 8;
const SVG_NS = "http://www.w3.org/2000/svg";

const svg = document.getElementById("scene");
const edgeLayer = document.getElementById("edges");
const nodeLayer = document.getElementById("nodes");

const nodes = GRAPH.nodes.map((n, i) => {
  const angle = (2 * Math.PI * i) / Math.max(1, GRAPH.nodes.length);
  const radius = 60 + 14 * Math.sqrt(i);
  return {
    id: n.id, label: n.label, title: n.title,
    x: radius * Math.cos(angle), y: radius * Math.sin(angle),
    vx: 0, vy: 0, fx: 0, fy: 0,
  };
});
const byId = new Map(nodes.map((n) => [n.id, n]));
const edges = GRAPH.edges
  .map((e) => ({ source: byId.get(e.from), target: byId.get(e.to) }))
  .filter((e) => e.source && e.target);

for (const e of edges) {
  e.line = document.createElementNS(SVG_NS, "line");
  e.line.setAttribute("class", "edge");
  e.line.setAttribute("marker-end", "url(#arrow)");
  edgeLayer.appendChild(e.line);
}
for (const n of nodes) {
  n.group = document.createElementNS(SVG_NS, "g");
  n.group.setAttribute("class", "node");
  const circle = document.createElementNS(SVG_NS, "circle");
  circle.setAttribute("r", NODE_RADIUS);
  const tooltip = document.createElementNS(SVG_NS, "title");
  tooltip.textContent = n.title;
  circle.appendChild(tooltip);
  const text = document.createElementNS(SVG_NS, "text");
  text.textContent = n.label;
  text.setAttribute("x", NODE_RADIUS + 4);
  text.setAttribute("y", 4);
  n.group.appendChild(circle);
  n.group.appendChild(text);
  circle.addEventListener("mousedown", (ev) => {
    dragged = n;
    ev.stopPropagation();
    ev.preventDefault();
  });
  nodeLayer.appendChild(n.group);
}

const view = { cx: 0, cy: 0, scale: 1 };
let dragged = null;
let panning = false;

function updateViewBox() {
  const w = (svg.clientWidth || 1024) / view.scale;
  const h = (svg.clientHeight || 768) / view.scale;
  svg.setAttribute("viewBox", [view.cx - w / 2, view.cy - h / 2, w, h].join(" "));
}

function toWorld(ev) {
  const rect = svg.getBoundingClientRect();
  return {
    x: view.cx + (ev.clientX - rect.left - rect.width / 2) / view.scale,
    y: view.cy + (ev.clientY - rect.top - rect.height / 2) / view.scale,
  };
}

function step() {
  for (let i = 0; i < nodes.length; i++) {
    const a = nodes[i];
    for (let j = i + 1; j < nodes.length; j++) {
      const b = nodes[j];
      let dx = b.x - a.x, dy = b.y - a.y;
      let d2 = dx * dx + dy * dy;
      if (d2 < 0.01) { dx = 0.1; dy = 0; d2 = 0.01; }
      const d = Math.sqrt(d2);
      const f = physics.gravitationalConstant / d2;
      const fx = (f * dx) / d, fy = (f * dy) / d;
      a.fx += fx; a.fy += fy;
      b.fx -= fx; b.fy -= fy;
    }
    a.fx -= a.x * physics.centralGravity;
    a.fy -= a.y * physics.centralGravity;
  }
  for (const e of edges) {
    const dx = e.target.x - e.source.x, dy = e.target.y - e.source.y;
    const d = Math.hypot(dx, dy) || 1;
    const f = (physics.springConstant * (d - physics.springLength)) / d;
    e.source.fx += f * dx; e.source.fy += f * dy;
    e.target.fx -= f * dx; e.target.fy -= f * dy;
  }
  for (const n of nodes) {
    if (n === dragged) { n.vx = 0; n.vy = 0; n.fx = 0; n.fy = 0; continue; }
    n.vx = (n.vx + n.fx * physics.timestep) * (1 - physics.damping);
    n.vy = (n.vy + n.fy * physics.timestep) * (1 - physics.damping);
    const speed = Math.hypot(n.vx, n.vy);
    if (speed > physics.maxVelocity) {
      n.vx = (n.vx / speed) * physics.maxVelocity;
      n.vy = (n.vy / speed) * physics.maxVelocity;
    }
    n.x += n.vx * physics.timestep;
    n.y += n.vy * physics.timestep;
    n.fx = 0; n.fy = 0;
  }
}

function draw() {
  for (const e of edges) {
    const dx = e.target.x - e.source.x, dy = e.target.y - e.source.y;
    const d = Math.hypot(dx, dy) || 1;
    // Stop the line at the target circle's rim so the arrow stays visible.
    const tx = e.target.x - (dx / d) * (NODE_RADIUS + 1);
    const ty = e.target.y - (dy / d) * (NODE_RADIUS + 1);
    e.line.setAttribute("x1", e.source.x);
    e.line.setAttribute("y1", e.source.y);
    e.line.setAttribute("x2", tx);
    e.line.setAttribute("y2", ty);
  }
  for (const n of nodes) {
    n.group.setAttribute("transform", "translate(" + n.x + "," + n.y + ")");
  }
}

function tick() {
  step();
  draw();
  requestAnimationFrame(tick);
}

svg.addEventListener("mousedown", () => {
  panning = true;
  svg.classList.add("panning");
});
window.addEventListener("mouseup", () => {
  dragged = null;
  panning = false;
  svg.classList.remove("panning");
});
window.addEventListener("mousemove", (ev) => {
  if (dragged) {
    const p = toWorld(ev);
    dragged.x = p.x;
    dragged.y = p.y;
  } else if (panning) {
    view.cx -= ev.movementX / view.scale;
    view.cy -= ev.movementY / view.scale;
    updateViewBox();
  }
});
svg.addEventListener("wheel", (ev) => {
  ev.preventDefault();
  view.scale = Math.min(8, Math.max(0.1, view.scale * Math.exp(-ev.deltaY * 0.001)));
  updateViewBox();
}, { passive: false });
window.addEventListener("resize", updateViewBox);

updateViewBox();
tick();
</script>
</body>
</html>
"##;
