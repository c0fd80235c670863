pub fn render_index(from: &str, to: &str) -> String {
    INDEX_HTML
        .replace("{{FROM}}", &escape_attr(from))
        .replace("{{TO}}", &escape_attr(to))
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Meetup Growth Dashboard</title>
  <style>
    :root {
      --bg-top: #606060;
      --bg-bottom: #101010;
      --ink: #e0e0e0;
      --muted: #999;
      --panel: rgba(48, 48, 48, 0.8);
      --grid: rgba(255, 255, 255, 0.1);
      --accent: #dddf0d;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(180deg, var(--bg-top), var(--bg-bottom));
      color: var(--ink);
      font-family: "Lucida Grande", "Lucida Sans Unicode", Verdana, Arial, Helvetica, sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1040px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    header h1 {
      margin: 0;
      font-size: clamp(1.6rem, 3vw, 2.2rem);
      color: #fff;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #ddd;
      font-size: 0.95rem;
    }

    .filters {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 14px;
      background: var(--panel);
      border-radius: 14px;
      padding: 18px;
    }

    .filters label {
      display: grid;
      gap: 6px;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .filters input {
      background: #333;
      color: silver;
      border: 1px solid #555;
      border-radius: 8px;
      padding: 10px 12px;
      font-size: 1rem;
    }

    .chart-card {
      background: var(--panel);
      border-radius: 14px;
      padding: 16px;
    }

    #chart-title {
      margin: 0 0 4px;
      font-size: 1.1rem;
      color: #fff;
    }

    #chart {
      width: 100%;
      height: 380px;
      display: block;
    }

    .chart-grid {
      stroke: var(--grid);
    }

    .chart-axis {
      stroke: var(--muted);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
      font-weight: bold;
    }

    .chart-line {
      fill: none;
      stroke-width: 2.5;
    }

    .chart-point {
      stroke: #333;
      stroke-width: 1;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 8px 18px;
      margin-top: 10px;
      font-size: 0.85rem;
      color: #ccc;
    }

    .legend span::before {
      content: "";
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 50%;
      margin-right: 6px;
      background: var(--swatch);
    }

    table {
      width: 100%;
      border-collapse: collapse;
      background: var(--panel);
      border-radius: 14px;
      overflow: hidden;
    }

    th, td {
      text-align: left;
      padding: 10px 14px;
      border-bottom: 1px solid rgba(255, 255, 255, 0.07);
    }

    th {
      color: var(--muted);
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
    }

    td.ratio {
      color: var(--accent);
      font-weight: bold;
    }

    .status {
      font-size: 0.95rem;
      min-height: 1.2em;
      color: #ccc;
    }

    .status[data-type="error"] {
      color: #df5353;
    }

    .status[data-type="warn"] {
      color: #dddf0d;
    }

    .hint {
      margin: 0;
      color: var(--muted);
      font-size: 0.85rem;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Meetup Growth</h1>
      <p class="subtitle">Monthly membership for groups matching a location and topic.</p>
    </header>

    <section class="filters">
      <label>Location
        <input class="group-location" type="text" placeholder="Chicago, IL" />
      </label>
      <label>Topics
        <input class="group-tags" type="text" placeholder="rust" />
      </label>
      <label>From
        <input id="from" type="text" value="{{FROM}}" placeholder="M/D/YYYY" />
      </label>
      <label>To
        <input id="to" type="text" value="{{TO}}" placeholder="M/D/YYYY" />
      </label>
    </section>

    <div class="status" id="status"></div>

    <section class="chart-card">
      <h2 id="chart-title">Meetup Members</h2>
      <p class="subtitle">Meetup.com data</p>
      <svg id="chart" viewBox="0 0 960 380" aria-label="Group members over time" role="img"></svg>
      <div class="legend" id="legend"></div>
    </section>

    <table class="table-result-view">
      <thead>
        <tr><th>Group</th><th>Growth</th></tr>
      </thead>
      <tbody></tbody>
    </table>

    <p class="hint">Growth is (max - min) / min members over the period, for groups with more monthly points than the range spans.</p>
  </main>

  <script>
    const COLORS = ['#DDDF0D', '#7798BF', '#55BF3B', '#DF5353', '#aaeeee', '#ff0066', '#eeaaee',
      '#55BF3B', '#DF5353', '#7798BF', '#aaeeee'];
    const MONTHS = ['Jan', 'Feb', 'Mar', 'Apr', 'May', 'Jun', 'Jul', 'Aug', 'Sep', 'Oct', 'Nov', 'Dec'];

    const locationEl = document.querySelector('.group-location');
    const tagsEl = document.querySelector('.group-tags');
    const fromEl = document.getElementById('from');
    const toEl = document.getElementById('to');
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const chartTitleEl = document.getElementById('chart-title');
    const legendEl = document.getElementById('legend');
    const tableBody = document.querySelector('.table-result-view tbody');

    let generation = 0;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeText = (value) => String(value)
      .replace(/&/g, '&amp;')
      .replace(/</g, '&lt;')
      .replace(/>/g, '&gt;')
      .replace(/"/g, '&quot;');

    const monthLabel = (millis) => {
      const date = new Date(millis);
      return `${MONTHS[date.getUTCMonth()]} '${String(date.getUTCFullYear()).slice(2)}`;
    };

    const smoothPath = (coords) => {
      if (coords.length === 1) {
        return `M ${coords[0][0]} ${coords[0][1]}`;
      }
      let path = `M ${coords[0][0].toFixed(2)} ${coords[0][1].toFixed(2)}`;
      for (let i = 1; i < coords.length; i += 1) {
        const [x0, y0] = coords[i - 1];
        const [x1, y1] = coords[i];
        const mid = (x0 + x1) / 2;
        path += ` C ${mid.toFixed(2)} ${y0.toFixed(2)}, ${mid.toFixed(2)} ${y1.toFixed(2)}, ${x1.toFixed(2)} ${y1.toFixed(2)}`;
      }
      return path;
    };

    const renderChart = (series) => {
      legendEl.innerHTML = '';
      const points = series.flatMap((s) => s.points);
      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data for this range</text>';
        return;
      }

      const width = 960;
      const height = 380;
      const paddingLeft = 56;
      const paddingRight = 24;
      const paddingY = 36;
      const top = 20;

      const times = points.map((p) => p[0]);
      let minX = Math.min(...times);
      let maxX = Math.max(...times);
      if (minX === maxX) {
        minX -= 15 * 86400000;
        maxX += 15 * 86400000;
      }
      const maxY = Math.max(1, ...points.map((p) => p[1]));

      const x = (t) => paddingLeft + ((t - minX) / (maxX - minX)) * (width - paddingLeft - paddingRight);
      const y = (v) => height - paddingY - (v / maxY) * (height - top - paddingY);

      let grid = '';
      const ticks = 5;
      for (let i = 0; i <= ticks; i += 1) {
        const value = (maxY * i) / ticks;
        grid += `<line class="chart-grid" x1="${paddingLeft}" y1="${y(value)}" x2="${width - paddingRight}" y2="${y(value)}" />`;
        grid += `<text class="chart-label" x="${paddingLeft - 8}" y="${y(value) + 4}" text-anchor="end">${Math.round(value)}</text>`;
      }

      const uniqueTimes = Array.from(new Set(times)).sort((a, b) => a - b);
      const labelEvery = Math.max(1, Math.ceil(uniqueTimes.length / 12));
      const xLabels = uniqueTimes
        .filter((_, index) => index % labelEvery === 0)
        .map((t) => `<text class="chart-label" x="${x(t)}" y="${height - paddingY + 18}" text-anchor="middle">${monthLabel(t)}</text>`)
        .join('');

      const lines = series.map((s, index) => {
        const color = COLORS[index % COLORS.length];
        const coords = s.points.map((p) => [x(p[0]), y(p[1])]);
        const name = escapeText(s.name);
        const circles = s.points
          .map((p, i) => `<circle class="chart-point" cx="${coords[i][0]}" cy="${coords[i][1]}" r="3.5" fill="${color}"><title>${name}\n${monthLabel(p[0])} - ${p[1]} members</title></circle>`)
          .join('');
        legendEl.insertAdjacentHTML('beforeend', `<span style="--swatch: ${color}">${name}</span>`);
        return `<path class="chart-line" stroke="${color}" d="${smoothPath(coords)}" />${circles}`;
      }).join('');

      const axis = `<line class="chart-axis" x1="${paddingLeft}" y1="${y(0)}" x2="${width - paddingRight}" y2="${y(0)}" />`;

      chartEl.setAttribute('viewBox', `0 0 ${width} ${height}`);
      chartEl.innerHTML = `${grid}${axis}${lines}${xLabels}`;
    };

    const renderTable = (ranking) => {
      tableBody.innerHTML = ranking
        .map((row) => `<tr><td>${escapeText(row.name)}</td><td class="ratio">${escapeText(row.percent)}</td></tr>`)
        .join('');
    };

    const getReport = async () => {
      const mine = ++generation;
      const params = new URLSearchParams({
        from: fromEl.value,
        to: toEl.value,
        city: locationEl.value,
        topics: tagsEl.value
      });
      setStatus('Loading...', 'info');

      const res = await fetch(`/api/report?${params}`);
      if (mine !== generation) {
        return;
      }
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Unable to load report');
      }

      const report = await res.json();
      if (mine !== generation) {
        return;
      }

      chartTitleEl.textContent = `${tagsEl.value} Meetup Members in ${locationEl.value}`;
      renderChart(report.series);
      renderTable(report.ranking);
      if (report.notice) {
        setStatus(report.notice, 'warn');
      } else {
        setStatus('', '');
      }
    };

    const refresh = () => {
      getReport().catch((err) => setStatus(err.message, 'error'));
    };

    [locationEl, tagsEl].forEach((input) => {
      input.addEventListener('keypress', (event) => {
        if (event.key === 'Enter') {
          event.preventDefault();
          refresh();
        }
      });
    });

    [fromEl, toEl].forEach((input) => input.addEventListener('change', refresh));

    refresh();
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_fills_default_range() {
        let html = render_index("10/16/2025", "10/16/2026");
        assert!(html.contains(r#"id="from" type="text" value="10/16/2025""#));
        assert!(html.contains(r#"id="to" type="text" value="10/16/2026""#));
        assert!(!html.contains("{{FROM}}"));
        assert!(!html.contains("{{TO}}"));
    }

    #[test]
    fn index_escapes_attribute_values() {
        let html = render_index("\"><script>", "1/1/2026");
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }
}
