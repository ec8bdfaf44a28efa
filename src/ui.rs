pub fn render_index(today: &str, week_ago: &str) -> String {
    INDEX_HTML
        .replace("{{TODAY}}", today)
        .replace("{{WEEK_AGO}}", week_ago)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>GlucoTrack</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap');

    :root {
      --bg: #f8fafc;
      --ink: #0f172a;
      --muted: #64748b;
      --accent: #0ea5e9;
      --accent-dark: #0284c7;
      --card: #ffffff;
      --line: #e2e8f0;
      --shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(180deg, #e0f2fe 0%, var(--bg) 220px);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
      padding: 32px 18px 48px;
      display: flex;
      justify-content: center;
    }

    .app {
      width: min(960px, 100%);
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.7rem, 3.5vw, 2.2rem);
      font-weight: 700;
      letter-spacing: -0.02em;
    }

    h1 .drop {
      color: var(--accent);
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
      font-size: 0.95rem;
    }

    .header-actions {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 10px;
      padding: 10px 16px;
      font-family: inherit;
      font-size: 0.92rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 120ms ease, box-shadow 120ms ease, background 120ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 8px 20px rgba(14, 165, 233, 0.35);
    }

    .btn-primary:hover {
      background: var(--accent-dark);
    }

    .btn-ghost {
      background: white;
      color: var(--ink);
      border: 1px solid var(--line);
    }

    .btn-ghost:hover {
      border-color: #cbd5e1;
    }

    .filter-bar {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(15, 23, 42, 0.05);
      border-radius: 12px;
    }

    .tab {
      background: transparent;
      border-radius: 9px;
      padding: 8px 14px;
      font-size: 0.88rem;
      color: var(--muted);
      box-shadow: none;
    }

    .tab.active {
      background: white;
      color: var(--accent-dark);
      box-shadow: 0 4px 12px rgba(15, 23, 42, 0.1);
    }

    .custom-range {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 10px;
      font-size: 0.88rem;
      color: var(--muted);
    }

    .custom-range input {
      margin-left: 6px;
      border: 1px solid var(--line);
      border-radius: 8px;
      padding: 7px 9px;
      font-family: inherit;
      font-size: 0.88rem;
      color: var(--ink);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: var(--card);
      border-radius: 16px;
      padding: 18px;
      border: 1px solid var(--line);
      box-shadow: var(--shadow);
    }

    .stat .label {
      display: block;
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .stat .value {
      display: block;
      margin-top: 8px;
      font-size: 1.8rem;
      font-weight: 700;
    }

    .stat .unit {
      font-size: 0.85rem;
      font-weight: 500;
      color: var(--muted);
    }

    .value.low-val {
      color: #16a34a;
    }

    .value.high-val {
      color: #dc2626;
    }

    .table-card {
      background: var(--card);
      border-radius: 16px;
      border: 1px solid var(--line);
      box-shadow: var(--shadow);
      overflow: hidden;
    }

    .table-head-row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      padding: 16px 20px;
      border-bottom: 1px solid var(--line);
    }

    .table-head-row h2 {
      margin: 0;
      font-size: 1.05rem;
    }

    .count-badge {
      font-size: 0.8rem;
      font-weight: 600;
      color: var(--accent-dark);
      background: #e0f2fe;
      border-radius: 999px;
      padding: 4px 12px;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.92rem;
    }

    th {
      text-align: left;
      padding: 10px 20px;
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
      background: #f8fafc;
    }

    td {
      padding: 12px 20px;
      border-top: 1px solid var(--line);
    }

    tbody tr:hover {
      background: #f8fafc;
    }

    td.level {
      font-weight: 700;
    }

    td .unit {
      font-size: 0.78rem;
      font-weight: 500;
      color: var(--muted);
    }

    .chip {
      display: inline-flex;
      align-items: center;
      gap: 6px;
      font-size: 0.8rem;
      font-weight: 600;
      border-radius: 999px;
      padding: 3px 10px;
      border: 1px solid var(--line);
    }

    .chip .dot {
      width: 7px;
      height: 7px;
      border-radius: 50%;
      background: #94a3b8;
    }

    .chip.low {
      color: #dc2626;
      background: #fef2f2;
      border-color: #fecaca;
    }

    .chip.low .dot {
      background: #ef4444;
    }

    .chip.normal {
      color: #047857;
      background: #ecfdf5;
      border-color: #a7f3d0;
    }

    .chip.normal .dot {
      background: #10b981;
    }

    .chip.elevated {
      color: #b45309;
      background: #fffbeb;
      border-color: #fde68a;
    }

    .chip.elevated .dot {
      background: #f59e0b;
    }

    .chip.high {
      color: #b91c1c;
      background: #fef2f2;
      border-color: #fecaca;
    }

    .chip.high .dot {
      background: #dc2626;
    }

    .row-delete {
      background: transparent;
      color: #cbd5e1;
      font-size: 1.1rem;
      line-height: 1;
      padding: 4px 8px;
      border-radius: 8px;
    }

    .row-delete:hover {
      color: #dc2626;
      background: #fef2f2;
    }

    .empty {
      margin: 0;
      padding: 28px 20px;
      text-align: center;
      color: var(--muted);
      font-size: 0.92rem;
    }

    .status {
      font-size: 0.92rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #dc2626;
    }

    .status[data-type="ok"] {
      color: #047857;
    }

    dialog {
      border: none;
      border-radius: 16px;
      padding: 0;
      width: min(420px, calc(100vw - 36px));
      box-shadow: 0 30px 70px rgba(15, 23, 42, 0.3);
    }

    dialog::backdrop {
      background: rgba(15, 23, 42, 0.45);
    }

    .dialog-body {
      padding: 24px;
      display: grid;
      gap: 14px;
    }

    .dialog-body h2 {
      margin: 0;
      font-size: 1.15rem;
    }

    .dialog-body label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      font-weight: 600;
      color: var(--ink);
    }

    .dialog-body input,
    .dialog-body select {
      border: 1px solid var(--line);
      border-radius: 10px;
      padding: 10px 12px;
      font-family: inherit;
      font-size: 0.92rem;
      color: var(--ink);
    }

    .dialog-body input:focus,
    .dialog-body select:focus {
      outline: 2px solid rgba(14, 165, 233, 0.4);
      border-color: var(--accent);
    }

    .field-row {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 12px;
    }

    .dialog-actions {
      display: flex;
      justify-content: flex-end;
      gap: 10px;
      margin-top: 4px;
    }

    .form-error {
      margin: 0;
      min-height: 1.1em;
      font-size: 0.85rem;
      color: #dc2626;
    }

    .form-feedback {
      margin: 0;
      min-height: 1.1em;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .form-feedback[data-type="ok"] {
      color: #047857;
    }

    .form-feedback[data-type="error"] {
      color: #dc2626;
    }

    .warning {
      margin: 0;
      padding: 10px 12px;
      font-size: 0.83rem;
      color: #b45309;
      background: #fffbeb;
      border: 1px solid #fde68a;
      border-radius: 10px;
    }

    .hint {
      margin: 0;
      font-size: 0.82rem;
      font-weight: 400;
      color: var(--muted);
    }

    @media (max-width: 640px) {
      .header-actions button {
        flex: 1;
      }
      th:nth-child(3), td:nth-child(3) {
        display: none;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Gluco<span class="drop">Track</span></h1>
        <p class="subtitle">Personal glucose diary with trends, Telegram alerts, and PDF reports.</p>
      </div>
      <div class="header-actions">
        <button class="btn-ghost" id="settings-btn" type="button">Settings</button>
        <button class="btn-ghost" id="export-btn" type="button">Export PDF</button>
        <button class="btn-primary" id="add-btn" type="button">+ Add Reading</button>
      </div>
    </header>

    <section class="filter-bar">
      <div class="tabs" role="tablist">
        <button class="tab" type="button" data-filter="3Days" role="tab" aria-selected="false">Last 3 Days</button>
        <button class="tab active" type="button" data-filter="1Week" role="tab" aria-selected="true">Last Week</button>
        <button class="tab" type="button" data-filter="1Month" role="tab" aria-selected="false">Last Month</button>
        <button class="tab" type="button" data-filter="Custom" role="tab" aria-selected="false">Custom</button>
      </div>
      <div class="custom-range" id="custom-range" hidden>
        <label>From<input type="date" id="start-date" value="{{WEEK_AGO}}" /></label>
        <label>To<input type="date" id="end-date" value="{{TODAY}}" /></label>
        <button class="btn-ghost" id="apply-range" type="button">Apply</button>
      </div>
    </section>

    <section class="panel">
      <div class="stat">
        <span class="label">Average</span>
        <span class="value" id="stat-avg">--<span class="unit"> mg/dL</span></span>
      </div>
      <div class="stat">
        <span class="label">Lowest</span>
        <span class="value low-val" id="stat-min">--<span class="unit"> mg/dL</span></span>
      </div>
      <div class="stat">
        <span class="label">Highest</span>
        <span class="value high-val" id="stat-max">--<span class="unit"> mg/dL</span></span>
      </div>
    </section>

    <section class="table-card">
      <div class="table-head-row">
        <h2 id="range-label">Last Week</h2>
        <span class="count-badge" id="count-badge">0 readings</span>
      </div>
      <table>
        <thead>
          <tr>
            <th>Date</th>
            <th>Time</th>
            <th>Type</th>
            <th>Level</th>
            <th>Status</th>
            <th></th>
          </tr>
        </thead>
        <tbody id="rows"></tbody>
      </table>
      <p class="empty" id="empty">No readings in this range yet.</p>
    </section>

    <div class="status" id="status"></div>

    <dialog id="reading-dialog">
      <form class="dialog-body" id="reading-form">
        <h2>Add Reading</h2>
        <div class="field-row">
          <label>Date
            <input type="date" id="reading-date" name="date" required />
          </label>
          <label>Time
            <input type="time" id="reading-time" name="time" required />
          </label>
        </div>
        <label>Glucose level (mg/dL)
          <input type="number" id="reading-value" name="value" min="1" placeholder="e.g. 98" required />
        </label>
        <label>Reading type
          <select id="reading-type" name="type">
            <option value="Fasting">Fasting</option>
            <option value="Pre-Meal">Pre-Meal</option>
            <option value="After Meal">After Meal</option>
            <option value="Bedtime">Bedtime</option>
          </select>
        </label>
        <p class="form-error" id="reading-error"></p>
        <div class="dialog-actions">
          <button class="btn-ghost" type="button" id="reading-cancel">Cancel</button>
          <button class="btn-primary" type="submit">Save Reading</button>
        </div>
      </form>
    </dialog>

    <dialog id="settings-dialog">
      <form class="dialog-body" id="settings-form">
        <h2>Notification Settings</h2>
        <p class="warning" id="token-warning" hidden>
          The server has no Telegram bot token configured. Set TELEGRAM_BOT_TOKEN and restart to enable alerts.
        </p>
        <label>Telegram chat ID
          <input type="text" id="chat-id" name="chat_id" placeholder="e.g. 123456789" />
          <span class="hint">Leave empty to turn off alerts. Message @userinfobot on Telegram to find your chat ID.</span>
        </label>
        <p class="form-feedback" id="settings-feedback"></p>
        <div class="dialog-actions">
          <button class="btn-ghost" type="button" id="settings-test">Send Test</button>
          <button class="btn-ghost" type="button" id="settings-cancel">Cancel</button>
          <button class="btn-primary" type="submit">Save</button>
        </div>
      </form>
    </dialog>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const rowsEl = document.getElementById('rows');
    const emptyEl = document.getElementById('empty');
    const rangeLabelEl = document.getElementById('range-label');
    const countBadgeEl = document.getElementById('count-badge');
    const avgEl = document.getElementById('stat-avg');
    const minEl = document.getElementById('stat-min');
    const maxEl = document.getElementById('stat-max');
    const customRangeEl = document.getElementById('custom-range');
    const startInput = document.getElementById('start-date');
    const endInput = document.getElementById('end-date');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    const readingDialog = document.getElementById('reading-dialog');
    const readingForm = document.getElementById('reading-form');
    const readingDate = document.getElementById('reading-date');
    const readingTime = document.getElementById('reading-time');
    const readingValue = document.getElementById('reading-value');
    const readingType = document.getElementById('reading-type');
    const readingError = document.getElementById('reading-error');

    const settingsDialog = document.getElementById('settings-dialog');
    const settingsForm = document.getElementById('settings-form');
    const chatIdInput = document.getElementById('chat-id');
    const tokenWarning = document.getElementById('token-warning');
    const settingsFeedback = document.getElementById('settings-feedback');

    let activeFilter = '1Week';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const pad = (n) => String(n).padStart(2, '0');

    const todayString = () => {
      const now = new Date();
      return `${now.getFullYear()}-${pad(now.getMonth() + 1)}-${pad(now.getDate())}`;
    };

    const currentTimeString = () => {
      const now = new Date();
      return `${pad(now.getHours())}:${pad(now.getMinutes())}`;
    };

    const formatDate = (dateStr) => {
      const date = new Date(dateStr + 'T00:00:00');
      if (Number.isNaN(date.getTime())) {
        return dateStr;
      }
      return new Intl.DateTimeFormat('en-US', { month: 'short', day: 'numeric', year: 'numeric' }).format(date);
    };

    const formatTime = (timeStr) => {
      const [hours, minutes] = timeStr.split(':');
      const h = parseInt(hours, 10);
      if (Number.isNaN(h)) {
        return timeStr;
      }
      const ampm = h >= 12 ? 'PM' : 'AM';
      const h12 = h % 12 || 12;
      return `${h12}:${minutes} ${ampm}`;
    };

    const query = () => {
      const params = new URLSearchParams({ filter: activeFilter });
      if (activeFilter === 'Custom') {
        params.set('start', startInput.value);
        params.set('end', endInput.value);
      }
      return params.toString();
    };

    const updateStats = (stats) => {
      const show = (value) => (stats.count > 0 ? value : '--');
      avgEl.innerHTML = `${show(stats.avg)}<span class="unit"> mg/dL</span>`;
      minEl.innerHTML = `${show(stats.min)}<span class="unit"> mg/dL</span>`;
      maxEl.innerHTML = `${show(stats.max)}<span class="unit"> mg/dL</span>`;
      countBadgeEl.textContent = `${stats.count} reading${stats.count === 1 ? '' : 's'}`;
    };

    const renderReadings = (data) => {
      rangeLabelEl.textContent = data.label;
      updateStats(data.stats);

      rowsEl.innerHTML = data.readings
        .map((reading) => `
          <tr>
            <td>${formatDate(reading.date)}</td>
            <td>${formatTime(reading.time)}</td>
            <td>${reading.type}</td>
            <td class="level">${reading.value} <span class="unit">mg/dL</span></td>
            <td><span class="chip ${reading.status.toLowerCase()}"><span class="dot"></span>${reading.status}</span></td>
            <td><button class="row-delete" type="button" data-id="${reading.id}" aria-label="Delete reading">&times;</button></td>
          </tr>`)
        .join('');
      emptyEl.hidden = data.readings.length > 0;
    };

    const loadReadings = async () => {
      const res = await fetch('/api/readings?' + query());
      if (!res.ok) {
        throw new Error((await res.text()) || 'Unable to load readings');
      }
      renderReadings(await res.json());
    };

    const saveReading = async () => {
      const payload = {
        date: readingDate.value,
        time: readingTime.value,
        value: Number(readingValue.value),
        type: readingType.value
      };
      const res = await fetch('/api/readings', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload)
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Unable to save reading');
      }
      readingDialog.close();
      setStatus('Reading saved', 'ok');
      setTimeout(() => setStatus('', ''), 1500);
      await loadReadings();
    };

    const removeReading = async (id) => {
      const res = await fetch('/api/readings/' + id, { method: 'DELETE' });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Unable to delete reading');
      }
      setStatus('Reading deleted', 'ok');
      setTimeout(() => setStatus('', ''), 1500);
      await loadReadings();
    };

    const openSettings = async () => {
      const res = await fetch('/api/settings');
      if (!res.ok) {
        throw new Error('Unable to load settings');
      }
      const settings = await res.json();
      chatIdInput.value = settings.telegram_chat_id || '';
      tokenWarning.hidden = settings.notifier_configured;
      settingsFeedback.textContent = '';
      settingsFeedback.dataset.type = '';
      settingsDialog.showModal();
    };

    const saveSettings = async () => {
      const res = await fetch('/api/settings', {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ telegram_chat_id: chatIdInput.value })
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Unable to save settings');
      }
      settingsDialog.close();
      setStatus('Settings saved', 'ok');
      setTimeout(() => setStatus('', ''), 1500);
    };

    const sendTest = async () => {
      settingsFeedback.textContent = 'Sending test message...';
      settingsFeedback.dataset.type = '';
      const res = await fetch('/api/settings/test', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ chat_id: chatIdInput.value })
      });
      const result = await res.json();
      if (result.ok) {
        settingsFeedback.textContent = 'Test message sent. Check Telegram.';
        settingsFeedback.dataset.type = 'ok';
      } else {
        settingsFeedback.textContent = result.error || 'Test message failed';
        settingsFeedback.dataset.type = 'error';
      }
    };

    const setActiveFilter = (filterValue) => {
      activeFilter = filterValue;
      tabs.forEach((button) => {
        const isActive = button.dataset.filter === filterValue;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      customRangeEl.hidden = filterValue !== 'Custom';
      if (filterValue !== 'Custom') {
        loadReadings().catch((err) => setStatus(err.message, 'error'));
      }
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveFilter(button.dataset.filter));
    });

    document.getElementById('apply-range').addEventListener('click', () => {
      loadReadings().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('add-btn').addEventListener('click', () => {
      readingForm.reset();
      readingDate.value = todayString();
      readingTime.value = currentTimeString();
      readingError.textContent = '';
      readingDialog.showModal();
    });

    document.getElementById('reading-cancel').addEventListener('click', () => readingDialog.close());

    readingForm.addEventListener('submit', (event) => {
      event.preventDefault();
      readingError.textContent = '';
      saveReading().catch((err) => {
        readingError.textContent = err.message;
      });
    });

    rowsEl.addEventListener('click', (event) => {
      const button = event.target.closest('.row-delete');
      if (!button) {
        return;
      }
      if (!confirm('Delete this reading?')) {
        return;
      }
      removeReading(button.dataset.id).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('settings-btn').addEventListener('click', () => {
      openSettings().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('settings-cancel').addEventListener('click', () => settingsDialog.close());

    document.getElementById('settings-test').addEventListener('click', () => {
      sendTest().catch((err) => {
        settingsFeedback.textContent = err.message;
        settingsFeedback.dataset.type = 'error';
      });
    });

    settingsForm.addEventListener('submit', (event) => {
      event.preventDefault();
      saveSettings().catch((err) => {
        settingsFeedback.textContent = err.message;
        settingsFeedback.dataset.type = 'error';
      });
    });

    document.getElementById('export-btn').addEventListener('click', () => {
      window.location.assign('/api/report?' + query());
    });

    const events = new EventSource('/api/events');
    events.addEventListener('store', () => {
      loadReadings().catch(() => {});
    });

    loadReadings().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;
