//! Global CSS styles for the card.
//!
//! Pastel stationery look: cream paper, rose accents, floating ornaments.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --cream: #fff8e7;
  --paper: #ffffff;
  --blush: #ffe4e6;

  /* ROSE (Actions, Headings, Stamp) */
  --rose: #f04299;
  --rose-glow: rgba(240, 66, 153, 0.35);
  --rose-dark: #b23a4b;

  /* TEXT */
  --ink: #1b0d14;
  --mauve: #9a4c73;

  /* ORNAMENTS */
  --butter: #fff7a1;
  --powder: #b0e0e6;
  --petal: #ffd1dc;
  --lilac: #cdb4db;

  /* Typography */
  --font-display: 'Playfair Display', Georgia, serif;
  --font-hand: 'Dancing Script', 'Brush Script MT', cursive;
  --font-body: 'Montserrat', 'Helvetica Neue', Arial, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 2.75rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  background: var(--cream);
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
  overflow-x: hidden;
}

.app-main {
  position: relative;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.scene {
  position: relative;
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 3rem 1.5rem;
  animation: fadeIn var(--transition-slow) both;
}

/* === Typography === */
.scene-title {
  font-family: var(--font-display);
  font-size: var(--text-3xl);
  color: var(--rose);
  text-align: center;
  margin-bottom: 0.5rem;
}

.scene-subtitle {
  font-family: var(--font-hand);
  font-size: var(--text-xl);
  color: var(--mauve);
  text-align: center;
  margin-bottom: 2rem;
}

.handwritten {
  font-family: var(--font-hand);
}

/* === Buttons === */
.btn-pill {
  font-family: var(--font-body);
  font-size: var(--text-base);
  font-weight: 600;
  color: var(--paper);
  background: var(--rose);
  border: none;
  border-radius: 999px;
  padding: 0.85rem 2.25rem;
  cursor: pointer;
  box-shadow: 0 8px 24px var(--rose-glow);
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-pill:hover {
  transform: translateY(-2px) scale(1.03);
  box-shadow: 0 12px 32px var(--rose-glow);
}

.btn-soft {
  font-family: var(--font-body);
  font-size: var(--text-sm);
  color: var(--rose);
  background: var(--blush);
  border: 1px solid var(--petal);
  border-radius: 999px;
  padding: 0.35rem 0.9rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-soft:hover {
  background: var(--petal);
}

.btn-link {
  font-family: var(--font-body);
  font-size: var(--text-sm);
  color: var(--mauve);
  background: none;
  border: none;
  text-decoration: underline;
  cursor: pointer;
}

.btn-link:hover {
  color: var(--rose);
}

/* === Decorations === */
.decor {
  position: absolute;
  width: 48px;
  height: 48px;
  pointer-events: none;
  opacity: 0.85;
}

.decor--top-left { top: 2rem; left: 2rem; }
.decor--top-right { top: 3rem; right: 2.5rem; width: 64px; height: 64px; }
.decor--bottom-left { bottom: 3rem; left: 3rem; }

.floating-particles {
  position: absolute;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
}

.particle {
  position: absolute;
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--petal);
  opacity: 0.6;
  animation-name: drift;
  animation-timing-function: ease-in-out;
  animation-iteration-count: infinite;
}

/* === Hero === */
.hero-card {
  position: relative;
  width: min(560px, 100%);
  background: var(--paper);
  border-radius: 24px;
  box-shadow: 0 24px 60px rgba(154, 76, 115, 0.18);
  overflow: hidden;
  animation: popUp 0.6s ease-out both;
}

.window-bar {
  display: flex;
  gap: 0.4rem;
  padding: 0.75rem 1rem;
  background: var(--blush);
}

.window-dot {
  width: 12px;
  height: 12px;
  border-radius: 50%;
  background: var(--petal);
}

.window-dot:nth-child(2) { background: var(--butter); }
.window-dot:nth-child(3) { background: var(--powder); }

.hero-body {
  padding: 2rem 2.5rem 2.5rem;
  text-align: center;
}

.hero-image {
  width: 140px;
  height: 140px;
  object-fit: contain;
  margin-bottom: 1rem;
}

.hero-corner {
  position: absolute;
  right: 1rem;
  bottom: 1rem;
  width: 72px;
  opacity: 0.9;
}

.hero-badge {
  display: inline-block;
  font-size: var(--text-xs);
  letter-spacing: 0.15em;
  text-transform: uppercase;
  color: var(--rose);
  background: var(--blush);
  border-radius: 999px;
  padding: 0.3rem 0.9rem;
  margin-bottom: 1rem;
}

.hero-greeting {
  font-family: var(--font-hand);
  font-size: var(--text-3xl);
  color: var(--rose);
  margin-bottom: 1rem;
}

.hero-line {
  color: var(--mauve);
  margin-bottom: 0.5rem;
}

.hero-cta {
  font-weight: 600;
  margin: 1.5rem 0 1rem;
}

.hero-signoff {
  font-family: var(--font-hand);
  font-size: var(--text-lg);
  color: var(--mauve);
  margin-top: 1.5rem;
}

/* === Envelope === */
.envelope-wrap {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.envelope {
  position: relative;
  width: 320px;
  height: 200px;
  background: var(--petal);
  border-radius: 8px;
  cursor: pointer;
  box-shadow: 0 16px 40px rgba(154, 76, 115, 0.2);
  transition: transform var(--transition-normal);
}

.envelope:hover {
  transform: translateY(-4px);
}

.envelope__flap {
  position: absolute;
  top: 0;
  left: 0;
  width: 0;
  height: 0;
  border-left: 160px solid transparent;
  border-right: 160px solid transparent;
  border-top: 110px solid var(--rose);
  transform-origin: top;
  transition: transform 0.8s ease;
  z-index: 2;
}

.envelope--open .envelope__flap {
  transform: rotateX(180deg);
  z-index: 0;
}

.envelope__seal {
  position: absolute;
  top: 90px;
  left: 50%;
  transform: translateX(-50%);
  font-size: var(--text-2xl);
  z-index: 3;
}

.envelope--open .envelope__seal {
  opacity: 0;
  transition: opacity var(--transition-fast);
}

.envelope__hint {
  font-family: var(--font-hand);
  font-size: var(--text-lg);
  color: var(--mauve);
}

.delivery-badge {
  font-size: var(--text-xs);
  letter-spacing: 0.12em;
  text-transform: uppercase;
  color: var(--rose-dark);
}

/* === Letter === */
.letter {
  position: relative;
  width: min(640px, 100%);
  background: var(--paper);
  border-radius: 16px;
  padding: 2.5rem 2.75rem 3rem;
  box-shadow: 0 24px 60px rgba(154, 76, 115, 0.18);
  animation: slideUp 0.8s ease-out both;
}

.letter__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1.5rem;
}

.letter__label {
  font-size: var(--text-xs);
  letter-spacing: 0.15em;
  text-transform: uppercase;
  color: var(--mauve);
}

.letter__decoration {
  position: absolute;
  top: -36px;
  left: -36px;
  width: 88px;
}

.letter__salutation {
  font-family: var(--font-hand);
  font-size: var(--text-2xl);
  color: var(--rose);
  margin-bottom: 1rem;
}

.letter__body {
  white-space: pre-line;
  margin-bottom: 1.5rem;
}

.letter__signature {
  font-family: var(--font-hand);
  font-size: var(--text-xl);
  color: var(--rose-dark);
  white-space: pre-line;
  min-height: 3.5rem;
}

.typing-cursor {
  display: inline-block;
  width: 2px;
  height: 1.1em;
  margin-left: 2px;
  background: var(--rose);
  vertical-align: text-bottom;
  animation: blink 0.9s step-end infinite;
}

.letter__sparkle {
  margin-left: 0.4rem;
  animation: sparkle 1.2s ease-in-out infinite;
}

.heart-stamp {
  position: absolute;
  right: 1.5rem;
  bottom: 1.5rem;
  width: 120px;
  height: 120px;
}

.scene-actions {
  margin-top: 2rem;
  display: flex;
  justify-content: center;
  animation: fadeIn var(--transition-slow) both;
}

/* === Playlist === */
.track-list {
  list-style: none;
  width: min(520px, 100%);
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.track {
  display: flex;
  align-items: center;
  gap: 1rem;
  background: var(--paper);
  border-radius: 14px;
  padding: 0.9rem 1.25rem;
  box-shadow: 0 8px 20px rgba(154, 76, 115, 0.1);
}

.track__number {
  font-family: var(--font-display);
  color: var(--rose);
  width: 1.5rem;
}

.track__title {
  font-weight: 600;
}

.track__artist {
  font-size: var(--text-sm);
  color: var(--mauve);
}

.track__link {
  margin-left: auto;
  color: var(--rose);
  text-decoration: none;
}

/* === Gallery === */
.memory-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: 1.25rem;
  width: min(820px, 100%);
}

.flip-card {
  perspective: 1000px;
  height: 240px;
  cursor: pointer;
  animation: popUp 0.6s ease-out both;
}

.flip-card__inner {
  position: relative;
  width: 100%;
  height: 100%;
  transition: transform 0.7s;
  transform-style: preserve-3d;
}

.flip-card--flipped .flip-card__inner {
  transform: rotateY(180deg);
}

.flip-card__face {
  position: absolute;
  inset: 0;
  border-radius: 16px;
  backface-visibility: hidden;
  overflow: hidden;
  box-shadow: 0 10px 24px rgba(154, 76, 115, 0.15);
}

.flip-card__front {
  background: var(--paper);
  display: flex;
  align-items: center;
  justify-content: center;
}

.flip-card__front img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.flip-card__placeholder {
  font-size: var(--text-3xl);
}

.flip-card__tap {
  position: absolute;
  top: 0.6rem;
  right: 0.6rem;
  font-size: var(--text-xs);
  font-weight: 600;
  color: var(--rose);
  background: var(--paper);
  border-radius: 999px;
  padding: 0.2rem 0.6rem;
  animation: pulse 2s ease-in-out infinite;
}

.flip-card__back-hint {
  position: absolute;
  bottom: 0.6rem;
  font-family: var(--font-body);
  font-size: var(--text-xs);
  color: var(--mauve);
}

.flip-card__back {
  transform: rotateY(180deg);
  flex-direction: column;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.25rem;
  font-family: var(--font-hand);
  font-size: var(--text-lg);
  text-align: center;
  color: var(--ink);
}

.gallery-hint {
  margin-top: 1.5rem;
  font-size: var(--text-sm);
  color: var(--mauve);
}

.progress {
  width: min(420px, 100%);
  margin-top: 0.75rem;
}

.progress__label {
  font-size: var(--text-xs);
  color: var(--mauve);
  margin-bottom: 0.35rem;
  text-align: center;
}

.progress__track {
  height: 8px;
  background: var(--blush);
  border-radius: 999px;
  overflow: hidden;
}

.progress__fill {
  height: 100%;
  background: var(--rose);
  border-radius: 999px;
  transition: width var(--transition-slow);
}

/* === Unlock Modal === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  background: rgba(27, 13, 20, 0.45);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 50;
  animation: fadeIn var(--transition-normal) both;
}

.modal {
  width: min(420px, 90vw);
  background: var(--paper);
  border-radius: 20px;
  padding: 2rem;
  text-align: center;
  box-shadow: 0 24px 60px rgba(27, 13, 20, 0.3);
  animation: popUp 0.4s ease-out both;
}

.modal__icon {
  font-size: var(--text-3xl);
  animation: bounceSlow 2s ease-in-out infinite;
}

.modal__title {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  color: var(--rose);
  margin: 0.75rem 0 0.5rem;
}

.modal__message {
  color: var(--mauve);
  margin-bottom: 1.5rem;
}

.modal__actions {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
}

/* === Final Letter === */
.final-letter {
  width: min(640px, 100%);
  background: var(--paper);
  border-radius: 16px;
  padding: 2.5rem 2.75rem;
  box-shadow: 0 24px 60px rgba(154, 76, 115, 0.18);
  animation: slideUp 0.8s ease-out both;
}

.final-letter__body p {
  margin-bottom: 1rem;
}

.final-letter__body em {
  color: var(--rose-dark);
}

.final-letter__signoff {
  font-family: var(--font-hand);
  font-size: var(--text-xl);
  color: var(--rose);
  white-space: pre-line;
  margin-top: 1.5rem;
}

/* === Confetti === */
.confetti {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
  z-index: 40;
}

.confetti-piece {
  position: absolute;
  top: -20px;
  animation-name: confettiFall;
  animation-timing-function: linear;
  animation-fill-mode: forwards;
}

.confetti-piece--circle { border-radius: 50%; }
.confetti-piece--square { border-radius: 2px; }
.confetti-piece--ribbon { border-radius: 1px; }

/* === Toasts === */
.toast-stack {
  position: fixed;
  left: 50%;
  bottom: 2rem;
  transform: translateX(-50%);
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 60;
}

.toast {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  background: var(--paper);
  border-radius: 999px;
  padding: 0.65rem 1.25rem;
  box-shadow: 0 10px 28px rgba(154, 76, 115, 0.25);
  cursor: pointer;
  animation: slideUp var(--transition-normal) both;
}

.toast--success { border: 1px solid var(--petal); }
.toast--error { border: 1px solid var(--rose-dark); color: var(--rose-dark); }

.toast__icon { font-size: var(--text-lg); }
.toast__message { font-size: var(--text-sm); }

/* === Footer === */
.footer {
  text-align: center;
  padding: 1.5rem;
  font-size: var(--text-xs);
  color: var(--mauve);
}

.footer__date {
  display: block;
  margin-top: 0.25rem;
  opacity: 0.8;
}

/* === Animations === */
.float { animation: float 4s ease-in-out infinite; }
.float-slow { animation: float 6s ease-in-out infinite; }
.bounce-slow { animation: bounceSlow 3s ease-in-out infinite; }
.pulse { animation: pulse 2s ease-in-out infinite; }

@keyframes fadeIn {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes slideUp {
  from { opacity: 0; transform: translateY(24px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes popUp {
  from { opacity: 0; transform: scale(0.92); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-12px); }
}

@keyframes bounceSlow {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-6px); }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.6; }
}

@keyframes sparkle {
  0%, 100% { opacity: 0.4; transform: scale(0.9); }
  50% { opacity: 1; transform: scale(1.15); }
}

@keyframes blink {
  50% { opacity: 0; }
}

@keyframes drift {
  0%, 100% { transform: translate(0, 0); }
  33% { transform: translate(12px, -18px); }
  66% { transform: translate(-10px, -8px); }
}

@keyframes confettiFall {
  0% { transform: translateY(0) rotate(0deg); opacity: 1; }
  100% { transform: translateY(110vh) rotate(720deg); opacity: 0; }
}
"#;
