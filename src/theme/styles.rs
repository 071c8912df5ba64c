//! Global CSS styles for Social Cards.
//!
//! Dark glass cards on a near-black page. Per-card colors arrive as inline
//! styles from the card view; everything static lives here.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --page-bg: #0b0f19;
  --card-bg: rgba(17, 24, 39, 0.95);
  --card-border: rgba(255, 255, 255, 0.08);
  --menu-bg: rgba(31, 41, 55, 0.98);

  /* Text */
  --text-primary: #f9fafb;
  --text-secondary: rgba(249, 250, 251, 0.7);
  --text-muted: rgba(249, 250, 251, 0.45);

  /* Typography */
  --font-sans: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;

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

html, body {
  min-height: 100%;
  background: var(--page-bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  -webkit-font-smoothing: antialiased;
  overflow-x: hidden;
}

/* === Page === */
.showcase {
  position: relative;
  min-height: 100vh;
  padding: 3rem 2rem 4rem;
  outline: none;
}

.showcase-header {
  text-align: center;
  margin-bottom: 2.5rem;
}

.page-title {
  font-size: 2.25rem;
  font-weight: 700;
  letter-spacing: -0.02em;
  background: linear-gradient(90deg, #f9fafb, rgba(249, 250, 251, 0.6));
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 2rem;
  max-width: 1100px;
  margin: 0 auto;
  perspective: 1000px;
}

/* === Card === */
.social-card {
  position: relative;
  border-radius: 1.25rem;
  background: var(--card-bg);
  border: 1px solid var(--card-border);
  overflow: hidden;
  transform-style: preserve-3d;
  transition: opacity 0.3s ease, transform 0.3s ease, box-shadow 0.3s ease;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.35);
}

.social-card.loading {
  animation: card-enter 0.6s ease-out backwards;
}

.social-card.card-hover {
  box-shadow: 0 20px 45px rgba(0, 0, 0, 0.5);
}

.social-card.switching {
  box-shadow: 0 0 0 2px rgba(255, 255, 255, 0.25), 0 20px 45px rgba(0, 0, 0, 0.5);
}

.ambient-light {
  position: absolute;
  inset: 0;
  pointer-events: none;
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.social-card.card-hover .ambient-light {
  opacity: 1;
}

.card-content {
  position: relative;
  z-index: 1;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  padding: 1.75rem;
}

.card-top {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.icon-container {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 3.5rem;
  height: 3.5rem;
  border-radius: 1rem;
  background: rgba(255, 255, 255, 0.06);
}

.icon {
  display: block;
}

/* === Account Switcher === */
.account-switcher {
  position: relative;
}

.account-switch-button,
.account-option {
  position: relative;
  overflow: hidden;
  border: none;
  cursor: pointer;
  font-family: inherit;
  color: var(--text-primary);
}

.account-switch-button {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
  padding: 0.45rem 0.8rem;
  border-radius: 999px;
  font-size: 0.8rem;
  background: rgba(255, 255, 255, 0.08);
  transition: background var(--transition-fast);
}

.account-switch-button:hover {
  background: rgba(255, 255, 255, 0.14);
}

.account-menu {
  position: absolute;
  top: calc(100% + 0.5rem);
  right: 0;
  z-index: 10;
  min-width: 11rem;
  display: flex;
  flex-direction: column;
  padding: 0.35rem;
  border-radius: 0.75rem;
  background: var(--menu-bg);
  border: 1px solid var(--card-border);
  box-shadow: 0 12px 30px rgba(0, 0, 0, 0.45);
  opacity: 0;
  visibility: hidden;
  transform: translateY(-6px);
  transition: opacity var(--transition-fast), transform var(--transition-fast), visibility var(--transition-fast);
}

.account-menu.visible {
  opacity: 1;
  visibility: visible;
  transform: translateY(0);
}

.account-option {
  text-align: left;
  padding: 0.55rem 0.75rem;
  border-radius: 0.5rem;
  font-size: 0.85rem;
  background: transparent;
  transition: background var(--transition-fast);
}

.account-option:hover {
  background: rgba(255, 255, 255, 0.08);
}

.account-option.active {
  background: rgba(255, 255, 255, 0.14);
  font-weight: 600;
}

/* === Profile Details === */
.profile-info {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.username {
  font-size: 1.2rem;
  font-weight: 600;
  transition: opacity var(--transition-normal);
}

.bio {
  font-size: 0.9rem;
  line-height: 1.5;
  color: var(--text-secondary);
  transition: opacity var(--transition-normal);
}

.profile-link {
  position: relative;
  overflow: hidden;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.7rem 1rem;
  border-radius: 0.75rem;
  font-weight: 600;
  font-size: 0.9rem;
  text-decoration: none;
  transition: filter var(--transition-fast);
}

.profile-link:hover {
  filter: brightness(1.1);
}

/* === Ripple === */
.ripple {
  position: absolute;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.35);
  transform: scale(0);
  pointer-events: none;
  animation: ripple 0.6s linear;
}

/* === Decorations === */
.timestamp {
  margin-top: 3rem;
  text-align: center;
  font-size: 0.8rem;
  color: var(--text-muted);
}

.floating-cursor {
  position: fixed;
  width: 24px;
  height: 24px;
  margin: -12px 0 0 -12px;
  border-radius: 50%;
  background: radial-gradient(circle, rgba(255, 255, 255, 0.35), transparent 70%);
  pointer-events: none;
  z-index: 100;
  transition: left 0.05s linear, top 0.05s linear;
}

/* === Keyframes === */
@keyframes card-enter {
  from {
    opacity: 0;
    transform: translateY(20px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

@keyframes ripple {
  to {
    transform: scale(4);
    opacity: 0;
  }
}

@keyframes wobble {
  0%, 100% { transform: translateY(-5px) rotate(0deg); }
  25% { transform: translateY(-5px) rotate(-8deg); }
  50% { transform: translateY(-5px) rotate(8deg); }
  75% { transform: translateY(-5px) rotate(-4deg); }
}

@keyframes pulse {
  0%, 100% { transform: translateZ(0) scale(1); }
  50% { transform: translateZ(0) scale(1.05); }
}

@media (max-width: 640px) {
  .showcase {
    padding: 2rem 1rem 3rem;
  }

  .card-grid {
    grid-template-columns: 1fr;
  }
}
"#;
