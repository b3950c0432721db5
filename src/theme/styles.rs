//! Global CSS styles for the Pysra dashboard.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --background: #f5f7fb;
  --surface: #ffffff;
  --border: #e2e8f0;

  /* ACCENT */
  --accent: #6366f1;
  --accent-soft: rgba(99, 102, 241, 0.15);

  /* TEXT */
  --text-primary: #1e293b;
  --text-muted: #64748b;

  /* SEMANTIC */
  --success: #10b981;
  --info: #3b82f6;
  --warning: #f59e0b;
  --danger: #ef4444;

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  background: var(--background);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.5;
}

/* === Navigation === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  gap: 2rem;
  padding: 1rem 2rem;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}

.app-title {
  font-size: 1.5rem;
  color: var(--accent);
}

.nav-links, .nav-sections {
  display: flex;
  gap: 1rem;
}

.nav-sections {
  margin-left: auto;
}

.nav-link, .section-link {
  color: var(--text-muted);
  text-decoration: none;
  transition: color var(--transition-fast);
}

.nav-link:hover, .section-link:hover, .nav-link.active {
  color: var(--accent);
}

/* === Layout === */
.dashboard, .games {
  max-width: 1000px;
  margin: 0 auto;
  padding: 2rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 1.5rem;
}

.section-header {
  font-size: 1.25rem;
  margin-bottom: 1rem;
}

.body-text {
  color: var(--text-muted);
  margin-bottom: 1rem;
}

/* === Alerts === */
.alert {
  padding: 0.75rem 1rem;
  border-radius: 8px;
  margin-bottom: 0.5rem;
  border-left: 4px solid currentColor;
}

.alert-success { color: var(--success); background: rgba(16, 185, 129, 0.1); }
.alert-info { color: var(--info); background: rgba(59, 130, 246, 0.1); }
.alert-warning { color: var(--warning); background: rgba(245, 158, 11, 0.1); }
.alert-danger { color: var(--danger); background: rgba(239, 68, 68, 0.1); }

/* === Stat Cards === */
.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: 1rem;
}

.stat-icon {
  font-size: 1.5rem;
}

.stat-value {
  font-size: 2rem;
  font-weight: 700;
  color: var(--accent);
}

.stat-label {
  color: var(--text-muted);
  font-size: 0.875rem;
}

/* === File Upload === */
.upload-row {
  display: flex;
  gap: 1rem;
  flex-wrap: wrap;
}

.file-upload-input {
  display: none;
}

.file-upload-label {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1rem;
  border: 2px dashed var(--border);
  border-radius: 8px;
  cursor: pointer;
  transition: border-color var(--transition-fast);
}

.file-upload-label:hover {
  border-color: var(--accent);
}

/* === Heatmap === */
.heatmap-grid {
  display: flex;
  flex-direction: column;
  gap: 3px;
}

.heatmap-week {
  display: flex;
  gap: 3px;
}

.heatmap-cell {
  width: 12px;
  height: 12px;
  border-radius: 2px;
  border: 1px solid var(--border);
}

/* === Buttons === */
.btn {
  padding: 0.5rem 1.25rem;
  border-radius: 8px;
  border: 1px solid transparent;
  cursor: pointer;
  font: inherit;
  transition: all var(--transition-fast);
}

.btn-primary { background: var(--accent); color: white; }
.btn-primary:hover { filter: brightness(1.1); }
.btn-secondary { background: var(--surface); border-color: var(--border); color: var(--text-primary); }
.btn-ghost { background: transparent; color: var(--accent); }

/* === Games === */
.games-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1rem;
}

.game-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 1.5rem;
  text-align: center;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  align-items: center;
}

.game-icon {
  font-size: 2.5rem;
}

.game-area {
  grid-column: 1 / -1;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 2rem;
  text-align: center;
}

.panel-actions {
  display: flex;
  justify-content: center;
  gap: 0.75rem;
  margin-top: 1rem;
}

.breathing-circle {
  width: 120px;
  height: 120px;
  margin: 0 auto 1rem;
  border-radius: 50%;
  background: var(--accent-soft);
  animation: breathe 16s ease-in-out infinite;
}

@keyframes breathe {
  0%, 100% { transform: scale(0.8); }
  25%, 50% { transform: scale(1.2); }
  75% { transform: scale(0.8); }
}

.breathing-text {
  font-size: 1.5rem;
  margin-bottom: 1rem;
}

.quote-text {
  font-size: 1.25rem;
  font-style: italic;
}

.memory-stats {
  display: flex;
  justify-content: center;
  gap: 2rem;
  margin-bottom: 1rem;
}

.memory-game-board {
  display: grid;
  grid-template-columns: repeat(4, 80px);
  gap: 0.75rem;
  justify-content: center;
}

.memory-card {
  height: 80px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 2rem;
  border-radius: 8px;
  background: var(--accent);
  color: white;
  cursor: pointer;
  user-select: none;
  transition: transform var(--transition-normal), background var(--transition-normal);
}

.memory-card.flipped {
  background: var(--surface);
  border: 2px solid var(--accent);
  transform: rotateY(180deg) scaleX(-1);
}

.memory-card.matched {
  border-color: var(--success);
  cursor: default;
}
"#;
