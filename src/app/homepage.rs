use leptos::prelude::*;
use leptos_meta::Title;

use super::cards::{Tool, ToolGrid};
use super::contact::ContactForm;
use super::copy::CopyButton;
use super::footer::Footer;
use super::navbar::{BackToTop, Navbar, ProgressBar};
use super::reveal::{LazyImg, Reveal};

const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("tools", "Tools"),
    ("install", "Install"),
    ("contact", "Contact"),
];

fn tools() -> Vec<Tool> {
    vec![
        Tool {
            title: "ripgrep",
            description: "Line-oriented search that recursively walks directories and respects gitignore.",
            tags: &["cli", "search"],
            href: "https://github.com/BurntSushi/ripgrep",
        },
        Tool {
            title: "bat",
            description: "A cat clone with syntax highlighting and git integration.",
            tags: &["cli", "viewer"],
            href: "https://github.com/sharkdp/bat",
        },
        Tool {
            title: "fd",
            description: "A simple, fast and user-friendly alternative to find.",
            tags: &["cli", "search", "files"],
            href: "https://github.com/sharkdp/fd",
        },
        Tool {
            title: "hyperfine",
            description: "Command-line benchmarking with statistical analysis.",
            tags: &["benchmark"],
            href: "https://github.com/sharkdp/hyperfine",
        },
        Tool {
            title: "zoxide",
            description: "A smarter cd command that remembers the directories you use.",
            tags: &["shell", "navigation"],
            href: "https://github.com/ajeetdsouza/zoxide",
        },
        Tool {
            title: "tokei",
            description: "Counts lines of code quickly, grouped by language.",
            tags: &["stats"],
            href: "https://github.com/XAMPPRocky/tokei",
        },
    ]
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <ProgressBar />
        <Navbar links=NAV_LINKS />
        <main class="page">
            <section id="home" class="hero">
                <Reveal>
                    <h1>"Dev Toolbox"</h1>
                    <p>"A hand-picked directory of command line tools worth installing today."</p>
                    <a href="/guide" class="cta">"Read the setup guide"</a>
                </Reveal>
            </section>

            <section id="tools">
                <Reveal>
                    <h2>"Tools"</h2>
                </Reveal>
                <ToolGrid tools=tools() />
            </section>

            <section id="install">
                <Reveal>
                    <h2>"Install"</h2>
                    <p>"Everything on this page installs with cargo."</p>
                </Reveal>
                <div class="download-grid">
                    <Reveal class="download-card">
                        <LazyImg src="/img/cargo.svg" alt="Cargo" />
                        <code>"cargo install ripgrep fd-find bat"</code>
                        <CopyButton text="cargo install ripgrep fd-find bat" />
                    </Reveal>
                    <Reveal class="download-card">
                        <LazyImg src="/img/homebrew.svg" alt="Homebrew" />
                        <code>"brew install ripgrep fd bat"</code>
                        <CopyButton text="brew install ripgrep fd bat" />
                    </Reveal>
                </div>
            </section>

            <section id="contact">
                <Reveal>
                    <h2>"Suggest a tool"</h2>
                    <ContactForm />
                </Reveal>
            </section>
        </main>
        <Footer />
        <BackToTop />
    }
}
