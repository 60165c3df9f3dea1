pub fn render_index(date: &str, total: u64) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{TOTAL}}", &total.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Calorie Journal</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f3f6ee;
      --bg-2: #cfe3c0;
      --ink: #28312a;
      --accent: #3a7d44;
      --accent-2: #b4552d;
      --muted: #6b7280;
      --grid: #e5e7eb;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(42, 74, 50, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%),
        linear-gradient(140deg, var(--bg-1), #eef4e4 55%, #f7f6ee 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      justify-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 14px;
      font-size: 1.15rem;
      font-weight: 600;
    }

    .subtitle {
      margin: 0;
      color: #5c665e;
      font-size: 1rem;
    }

    .card {
      background: var(--card);
      backdrop-filter: blur(10px);
      border-radius: 22px;
      border: 1px solid rgba(58, 125, 68, 0.1);
      box-shadow: var(--shadow);
      padding: 26px;
    }

    form {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
      align-items: end;
    }

    .field {
      display: grid;
      gap: 6px;
    }

    .field span {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #79837b;
    }

    input,
    select {
      appearance: none;
      border: 1px solid rgba(40, 49, 42, 0.18);
      border-radius: 12px;
      padding: 11px 12px;
      font: inherit;
      background: white;
      color: var(--ink);
    }

    input:focus,
    select:focus {
      outline: 2px solid var(--accent);
      outline-offset: 1px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 13px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(58, 125, 68, 0.3);
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .status {
      min-height: 1.2rem;
      margin-top: 10px;
      font-size: 0.9rem;
    }

    .status[data-type='error'] {
      color: var(--accent-2);
    }

    .status[data-type='ok'] {
      color: var(--accent);
    }

    .total-row {
      display: flex;
      flex-wrap: wrap;
      gap: 18px;
      align-items: center;
    }

    .metric {
      font-size: 2rem;
      font-weight: 600;
      color: var(--accent);
    }

    ul.entries {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 14px;
    }

    li.entry {
      display: grid;
      grid-template-columns: 96px 1fr;
      gap: 16px;
      align-items: center;
      background: white;
      border: 1px solid rgba(40, 49, 42, 0.08);
      border-radius: 16px;
      padding: 12px;
    }

    li.entry img {
      width: 96px;
      height: 96px;
      object-fit: cover;
      border-radius: 12px;
    }

    li.empty {
      color: var(--muted);
      padding: 8px 2px;
    }

    .entry-meta {
      display: grid;
      gap: 3px;
      font-size: 0.92rem;
    }

    .entry-meta span {
      color: var(--muted);
    }

    svg.chart {
      width: 100%;
      height: auto;
      display: block;
    }

    .chart-grid {
      stroke: var(--grid);
      stroke-width: 1;
    }

    .chart-axis {
      stroke: #9ca3af;
      stroke-width: 1;
    }

    .chart-bar {
      fill: var(--accent);
    }

    .chart-value {
      font-size: 11px;
      fill: #1f2937;
    }

    .chart-label {
      font-size: 11px;
      fill: var(--muted);
    }
  </style>
</head>
<body>
  <div class="app">
    <header>
      <h1>Calorie Journal</h1>
      <p class="subtitle">Log meals and drinks with a photo, then follow your intake day by day.</p>
    </header>

    <section class="card">
      <h2>Add an entry</h2>
      <form id="entry-form">
        <label class="field">
          <span>Photo</span>
          <input id="photo" type="file" accept="image/*" required />
        </label>
        <label class="field">
          <span>Date</span>
          <input id="entry-date" type="date" value="{{DATE}}" required />
        </label>
        <label class="field">
          <span>Type</span>
          <select id="entry-type">
            <option value="meal">Meal</option>
            <option value="drink">Drink</option>
          </select>
        </label>
        <label class="field">
          <span>Name (optional)</span>
          <input id="entry-name" type="text" placeholder="Salad, orange juice..." />
        </label>
        <label class="field">
          <span>Quantity</span>
          <input id="quantity" type="number" min="1" step="1" value="1" required />
        </label>
        <label class="field">
          <span>Calories per portion (optional)</span>
          <input id="calories" type="number" min="0" step="1" placeholder="Auto estimate" />
        </label>
        <button type="submit">Add entry</button>
      </form>
      <p id="status" class="status" role="status"></p>
    </section>

    <section class="card">
      <h2>Daily total</h2>
      <div class="total-row">
        <label class="field">
          <span>Pick a day</span>
          <input id="selected-date" type="date" value="{{DATE}}" />
        </label>
        <span id="daily-total" class="metric">{{TOTAL}} kcal</span>
      </div>
    </section>

    <section class="card">
      <h2>Calories per day</h2>
      <svg id="chart" class="chart" viewBox="0 0 860 280" preserveAspectRatio="xMidYMid meet"></svg>
    </section>

    <section class="card">
      <h2>History</h2>
      <ul id="entries" class="entries"></ul>
    </section>
  </div>

  <script>
    const form = document.getElementById('entry-form');
    const photoInput = document.getElementById('photo');
    const dateInput = document.getElementById('entry-date');
    const typeInput = document.getElementById('entry-type');
    const nameInput = document.getElementById('entry-name');
    const quantityInput = document.getElementById('quantity');
    const caloriesInput = document.getElementById('calories');
    const selectedDateInput = document.getElementById('selected-date');
    const dailyTotalEl = document.getElementById('daily-total');
    const entriesEl = document.getElementById('entries');
    const chartEl = document.getElementById('chart');
    const statusEl = document.getElementById('status');

    const today = dateInput.value;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (value) =>
      String(value)
        .replace(/&/g, '&amp;')
        .replace(/</g, '&lt;')
        .replace(/>/g, '&gt;')
        .replace(/'/g, '&apos;')
        .replace(/"/g, '&quot;');

    const formatDay = (date) => `${date.slice(8, 10)}/${date.slice(5, 7)}`;

    const readAsDataUrl = (file) =>
      new Promise((resolve, reject) => {
        const reader = new FileReader();
        reader.onload = () => resolve(String(reader.result));
        reader.onerror = () => reject(new Error('Unable to read the photo'));
        reader.readAsDataURL(file);
      });

    const renderChart = (chart) => {
      const { canvas, padding } = chart;
      chartEl.setAttribute('viewBox', `0 0 ${canvas.width} ${canvas.height}`);

      if (chart.is_empty) {
        chartEl.innerHTML = `<text class="chart-label" x="${canvas.width / 2}" y="${canvas.height / 2}" text-anchor="middle">Add entries to see the chart.</text>`;
        return;
      }

      let grid = '';
      for (const line of chart.gridlines) {
        grid += `<line class="chart-grid" x1="${padding.left}" y1="${line.y}" x2="${canvas.width - padding.right}" y2="${line.y}" />`;
        grid += `<text class="chart-label" x="${padding.left - 8}" y="${line.y + 4}" text-anchor="end">${line.label_value}</text>`;
      }

      const baselineY = canvas.height - padding.bottom;
      const axis = `<line class="chart-axis" x1="${padding.left}" y1="${baselineY}" x2="${canvas.width - padding.right}" y2="${baselineY}" />`;

      let bars = '';
      for (const bar of chart.bars) {
        const middle = bar.x + bar.width / 2;
        bars += `<rect class="chart-bar" x="${bar.x}" y="${bar.y}" width="${bar.width}" height="${bar.height}" rx="6" />`;
        bars += `<text class="chart-value" x="${middle}" y="${bar.y - 6}" text-anchor="middle">${bar.value}</text>`;
        bars += `<text class="chart-label" x="${middle}" y="${canvas.height - 16}" text-anchor="middle">${formatDay(bar.date)}</text>`;
      }

      chartEl.innerHTML = grid + axis + bars;
    };

    const renderEntries = (entries) => {
      if (!entries.length) {
        entriesEl.innerHTML = '<li class="empty">No entries yet.</li>';
        return;
      }

      entriesEl.innerHTML = entries
        .map(
          (entry) => `
        <li class="entry">
          <img src="${entry.image_data_url}" alt="${escapeHtml(entry.name)}" />
          <div class="entry-meta">
            <strong>${escapeHtml(entry.name)}</strong>
            <span>${entry.date} &middot; ${entry.type}</span>
            <span>Quantity: ${entry.quantity} &middot; ${entry.calories_per_portion} kcal / portion</span>
            <strong>Total: ${entry.total_calories} kcal</strong>
          </div>
        </li>`
        )
        .join('');
    };

    const loadEntries = async () => {
      const res = await fetch('/api/entries');
      if (!res.ok) {
        throw new Error('Unable to load entries');
      }
      renderEntries(await res.json());
    };

    const loadTotal = async () => {
      const res = await fetch(`/api/total?date=${selectedDateInput.value}`);
      if (!res.ok) {
        throw new Error('Unable to load the daily total');
      }
      const data = await res.json();
      dailyTotalEl.textContent = `${data.total_calories} kcal`;
    };

    const loadChart = async () => {
      const res = await fetch('/api/chart');
      if (!res.ok) {
        throw new Error('Unable to load the chart');
      }
      renderChart(await res.json());
    };

    const refresh = async () => {
      await Promise.all([loadEntries(), loadTotal(), loadChart()]);
    };

    const submitEntry = async () => {
      if (!photoInput.files || !photoInput.files[0]) {
        setStatus('Add a photo before saving.', 'error');
        return;
      }

      setStatus('Saving...', 'info');
      const imageDataUrl = await readAsDataUrl(photoInput.files[0]);
      const calories = Number(caloriesInput.value);

      const payload = {
        date: dateInput.value,
        type: typeInput.value,
        name: nameInput.value,
        quantity: Number(quantityInput.value),
        calories_per_portion: Number.isFinite(calories) && calories > 0 ? calories : null,
        image_data_url: imageDataUrl
      };

      const res = await fetch('/api/entries', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload)
      });

      if (!res.ok) {
        const body = await res.json().catch(() => null);
        throw new Error(body && body.error ? body.error : 'Request failed');
      }

      const entry = await res.json();
      form.reset();
      dateInput.value = today;
      quantityInput.value = '1';
      selectedDateInput.value = entry.date;

      await refresh();
      setStatus('Entry saved', 'ok');
      setTimeout(() => setStatus('', ''), 1500);
    };

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      submitEntry().catch((err) => setStatus(err.message, 'error'));
    });

    selectedDateInput.addEventListener('change', () => {
      loadTotal().catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
