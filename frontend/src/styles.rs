/// Colour tokens per theme, keyed off the `data-theme` attribute on `<html>`.
pub const GLOBAL_CSS: &str = r#"
:root,
[data-theme="light"] {
    --bg: #fbfaf7;
    --surface: #f1efe9;
    --text: #1c1b19;
    --muted: #6b6862;
    --border: rgba(28, 27, 25, 0.12);
    --accent: #3a5ccc;
}

[data-theme="dark"] {
    --bg: #121316;
    --surface: #1b1d22;
    --text: #f2f1ee;
    --muted: #9a9891;
    --border: rgba(242, 241, 238, 0.12);
    --accent: #7e9bff;
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    transition: background 0.3s ease, color 0.3s ease;
}

.top-nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 100;
    transition: background 0.3s ease;
}

.top-nav.scrolled {
    background: var(--bg);
    border-bottom: 1px solid var(--border);
}

.nav-content {
    display: flex;
    align-items: center;
    justify-content: space-between;
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 2rem;
}

.nav-logo {
    font-weight: 700;
    font-size: 1.2rem;
    color: var(--text);
    text-decoration: none;
}

.nav-right {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}

.nav-link {
    color: var(--text);
    text-decoration: none;
}

.burger-menu {
    display: flex;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
}

.burger-menu span {
    width: 24px;
    height: 2px;
    background: var(--text);
}

.nav-right.mobile {
    display: none;
}

.nav-right.mobile.mobile-menu-open {
    display: flex;
    flex-direction: column;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    padding: 1.5rem;
    background: var(--bg);
    border-bottom: 1px solid var(--border);
}

.theme-toggle {
    background: transparent;
    border: 1px solid var(--border);
    border-radius: 999px;
    width: 40px;
    height: 40px;
    cursor: pointer;
    color: var(--text);
    font-size: 1.1rem;
    transition: transform 0.2s ease;
}

.theme-toggle:hover {
    transform: rotate(20deg);
}

.not-found {
    text-align: center;
    padding: 10rem 2rem;
}

.site-footer {
    text-align: center;
    padding: 2rem;
    color: var(--muted);
    border-top: 1px solid var(--border);
}
"#;
