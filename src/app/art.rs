//! Static presentation assets: the page stylesheet and the dealer portrait.

pub(crate) const STYLE_ID: &str = "dp-style";

pub(crate) const STYLESHEET: &str = r#"
html { touch-action: none; -webkit-touch-callout: none; -webkit-user-select: none; user-select: none; }
body { margin: 0; padding: 0; background: #1e1e1e; font-family: 'Poppins', sans-serif; overflow: hidden; }

@keyframes dp-shake {
  0%, 100% { transform: translate(0, 0) rotate(0deg); }
  25% { transform: translate(-5px, -5px) rotate(-1deg); }
  50% { transform: translate(5px, 5px) rotate(1deg); }
  75% { transform: translate(-3px, 3px) rotate(-0.5deg); }
}
@keyframes dp-bob {
  0%, 100% { transform: translateY(-50%) translateY(-5px) rotate(-5deg); }
  50% { transform: translateY(-50%) translateY(5px) rotate(5deg); }
}
@keyframes dp-sway {
  0%, 100% { transform: translateY(-2px) rotate(-1deg); }
  50% { transform: translateY(2px) rotate(1deg); }
}
.screen-shake { animation: dp-shake 0.5s ease-in-out; }

.dp-canvas { position: fixed; top: 0; left: 0; z-index: 1; cursor: crosshair; }
.dp-fx { position: fixed; top: 0; left: 0; width: 100%; height: 100%; z-index: 999; pointer-events: none; }

.dp-container { text-align: center; padding: 0; position: relative; z-index: 2; pointer-events: none; }
.dp-title { font-size: 2.5rem; margin: 1rem 0; color: #fff; text-shadow: 0 0 10px rgba(255,255,255,0.3); pointer-events: none; }
.dp-button-area { position: relative; z-index: 3; background: transparent; padding: 0.5rem; display: inline-block; pointer-events: auto; margin: 2rem 0; }
.dp-button {
  background: radial-gradient(circle at 30% 30%, #ff4444, #cc0000); border: none; padding: 2rem 4rem;
  font-size: 1.8rem; font-weight: 600; color: white; border-radius: 50%; cursor: pointer;
  box-shadow: 0 8px 0 #990000, 0 10px 15px rgba(0,0,0,0.35), inset 0 -8px 12px rgba(0,0,0,0.35);
  text-shadow: 2px 2px 3px rgba(0,0,0,0.3); position: relative; width: 200px; height: 200px;
  font-family: 'Poppins', sans-serif; transition: transform 0.1s ease-in-out, box-shadow 0.1s ease-in-out;
}
.dp-button:hover { transform: scale(1.05); box-shadow: 0 10px 0 #990000, 0 12px 20px rgba(0,0,0,0.35), inset 0 -8px 12px rgba(0,0,0,0.35); }
.dp-button:active {
  transform: scale(0.92) translateY(10px);
  box-shadow: 0 2px 0 #990000, 0 4px 8px rgba(0,0,0,0.35), inset 0 -4px 6px rgba(0,0,0,0.35);
  background: radial-gradient(circle at 30% 30%, #ee3333, #bb0000);
}
.dp-score { font-size: 1.5rem; color: #FF6B6B; margin: 1rem auto 0; font-weight: 600; pointer-events: none; display: table; }

.dp-sound { position: fixed; top: 20px; right: 20px; background: none; border: none; font-size: 2rem; cursor: pointer; opacity: 0.7; transition: opacity 0.3s; z-index: 3; pointer-events: auto; }
.dp-sound:hover { opacity: 1; }

.dp-toggle { position: fixed; background: rgba(40,40,40,0.9); color: white; border: none; padding: 8px 12px; border-radius: 4px; cursor: pointer; font-size: 14px; z-index: 4; transition: all 0.3s ease; }
.dp-toggle:hover { background: rgba(60,60,60,0.9); }
.dp-palette-toggle { bottom: 20px; right: 50%; transform: translateX(50%); }
.dp-palette-toggle.dp-open { bottom: 240px; right: 20px; transform: none; }
.dp-dealer-toggle { bottom: 20px; left: 20px; }
.dp-dealer-toggle.dp-open { left: 220px; }

.dp-palette { position: fixed; bottom: 20px; right: 20px; background: rgba(40,40,40,0.9); padding: 10px; border-radius: 8px; display: none; flex-direction: column; gap: 8px; z-index: 3; pointer-events: auto; box-shadow: 0 2px 10px rgba(0,0,0,0.3); }
.dp-palette.dp-open { display: flex; }
.dp-row { display: flex; gap: 8px; justify-content: center; }
.dp-swatch { width: 30px; height: 30px; border: 2px solid transparent; border-radius: 4px; cursor: pointer; transition: transform 0.1s; }
.dp-swatch.dp-selected { border-color: #fff; }
.dp-swatch:hover { transform: scale(1.1); }
.dp-swatch:active { transform: scale(0.95); }
.dp-size-label { color: white; font-size: 12px; text-align: center; margin-bottom: 5px; }
.dp-size { width: 100%; margin-top: 5px; height: 20px; }

.dp-cute-star {
  position: fixed; right: 40px; top: 50%; font-size: 60px; width: 60px; height: 60px; cursor: pointer; user-select: none; z-index: 3;
  display: flex; align-items: center; justify-content: center; pointer-events: auto;
  background: linear-gradient(45deg, #FFD700, #FFA500); -webkit-background-clip: text; background-clip: text; -webkit-text-fill-color: transparent;
  filter: drop-shadow(0 0 10px rgba(255,223,0,0.3)); animation: dp-bob 2s ease-in-out infinite;
}
.dp-cute-star:hover { filter: drop-shadow(0 0 15px rgba(255,223,0,0.5)); }

.dp-dealer { position: fixed; left: 20px; bottom: 20px; display: none; align-items: flex-end; gap: 2px; z-index: 3; pointer-events: auto; }
.dp-dealer.dp-open { display: flex; }
.dp-dealer-title { font-size: 18px; color: #fff; text-shadow: 2px 2px 4px rgba(0,0,0,0.5); text-align: center; margin-bottom: 5px; }
.dp-dealer-character { width: 140px; height: 160px; filter: drop-shadow(0 0 10px rgba(0,0,0,0.5)); animation: dp-sway 4s ease-in-out infinite; }
.dp-dealer-character svg { width: 100%; height: 100%; }
.dp-dealer-input { background: rgba(0,0,0,0.6); border: 2px solid #666; border-radius: 8px; color: #fff; padding: 8px 12px; font-size: 16px; width: 200px; margin-left: 4px; transition: all 0.3s ease; }
.dp-dealer-input:focus { outline: none; border-color: #888; box-shadow: 0 0 10px rgba(255,255,255,0.1); }
.dp-dealer-input::placeholder { color: #888; }

@media (max-width: 768px) {
  .dp-title { font-size: 2rem; margin: 0.5rem 0; }
  .dp-button { width: 150px; height: 150px; font-size: 1.4rem; padding: 1.5rem 3rem; }
  .dp-sound { top: 10px; right: 10px; font-size: 1.8rem; }
  .dp-palette-toggle, .dp-palette-toggle.dp-open { bottom: 20px; right: 50%; transform: translateX(50%); }
  .dp-palette-toggle.dp-open { bottom: 200px; }
  .dp-palette { bottom: 70px; right: 50%; transform: translateX(50%); width: 90%; max-width: 300px; }
  .dp-row { gap: 12px; }
  .dp-swatch { width: 35px; height: 35px; }
  .dp-size { height: 30px; margin: 10px 0; }
  .dp-cute-star { right: 20px; font-size: 40px; width: 40px; height: 40px; }
  .dp-dealer, .dp-dealer.dp-open, .dp-dealer-toggle { display: none; }
}
"#;

/// Green alien in a tank top, leaning in a dark doorway.
pub(crate) const DEALER_SVG: &str = r##"<svg viewBox="0 0 100 120" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="dp-alien-skin" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="#33FF33"/><stop offset="100%" stop-color="#229922"/>
    </linearGradient>
    <linearGradient id="dp-alien-highlight" x1="0%" y1="0%" x2="100%" y2="0%">
      <stop offset="0%" stop-color="#44FF44"/><stop offset="100%" stop-color="#33FF33"/>
    </linearGradient>
    <filter id="dp-glow">
      <feGaussianBlur stdDeviation="2" result="blur"/>
      <feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge>
    </filter>
  </defs>
  <rect x="15" y="10" width="70" height="120" rx="8" ry="8" fill="#1A1A1A"/>
  <rect x="18" y="13" width="64" height="114" rx="6" ry="6" fill="#2A2A2A"/>
  <path d="M30 45 C30 20, 70 20, 70 45 L65 65 L35 65 Z" fill="url(#dp-alien-skin)"/>
  <path d="M32 43 C32 22, 68 22, 68 43 L64 62 L36 62 Z" fill="url(#dp-alien-highlight)"/>
  <g filter="url(#dp-glow)">
    <path d="M35 38 L45 42 L35 46 Z" fill="#FFFF00" opacity="0.8"/>
    <path d="M65 38 L55 42 L65 46 Z" fill="#FFFF00" opacity="0.8"/>
  </g>
  <circle cx="40" cy="42" r="2" fill="#000"/>
  <circle cx="60" cy="42" r="2" fill="#000"/>
  <path d="M40 52 Q50 58 60 52" fill="none" stroke="#1A1A1A" stroke-width="2"/>
  <path d="M42 54 Q50 59 58 54" fill="none" stroke="#2A2A2A" stroke-width="1"/>
  <path d="M35 65 L30 120 L70 120 L65 65" fill="#FFFFFF"/>
  <path d="M38 70 L34 115 L66 115 L62 70" fill="#EEEEEE"/>
  <path d="M36 75 L33 110 L67 110 L64 75" fill="#DDDDDD"/>
  <path d="M40 65 L42 70 L45 65" fill="none" stroke="#228822" stroke-width="1.5"/>
  <path d="M55 65 L58 70 L60 65" fill="none" stroke="#228822" stroke-width="1.5"/>
  <path d="M35 30 L38 33 M62 30 L65 33 M45 25 L48 28 M52 25 L55 28" stroke="#33DD33" stroke-width="1.5"/>
  <path d="M40 35 L43 38 M57 35 L60 38" stroke="#228822" stroke-width="1"/>
  <g transform="translate(0, -2)">
    <rect x="35" y="80" width="30" height="6" fill="#333"/>
    <rect x="36" y="81" width="28" height="4" fill="#4A4A4A"/>
    <circle cx="38" cy="83" r="2.5" fill="#666"/><circle cx="44" cy="83" r="2.5" fill="#666"/>
    <circle cx="50" cy="83" r="2.5" fill="#666"/><circle cx="56" cy="83" r="2.5" fill="#666"/>
    <circle cx="62" cy="83" r="2.5" fill="#666"/>
  </g>
  <path d="M33 35 C35 33, 37 34, 38 36 M62 35 C64 33, 66 34, 67 36" stroke="#228822" stroke-width="0.5" fill="none"/>
</svg>"##;
