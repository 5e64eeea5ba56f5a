use leptos::prelude::*;
use leptos_meta::Title;

use super::copy::CopyButton;
use super::footer::Footer;
use super::navbar::{AnchorLink, BackToTop, Navbar, ProgressBar, ReadingIndicator};
use super::reveal::Reveal;

const NAV_LINKS: &[(&str, &str)] = &[
    ("shell", "Shell"),
    ("search", "Search"),
    ("benchmarks", "Benchmarks"),
];

#[component]
pub fn GuidePage() -> impl IntoView {
    view! {
        <Title text="Setup Guide" />
        <ProgressBar />
        <Navbar links=NAV_LINKS />
        <ReadingIndicator />
        <article class="main-content">
            <h1>"Setting up a modern terminal"</h1>
            <Reveal class="toc">
                <h2>"Contents"</h2>
                <ol>
                    {NAV_LINKS
                        .iter()
                        .map(|(target, label)| {
                            view! { <li><AnchorLink target=*target label=*label class="toc-link" /></li> }
                        })
                        .collect_view()}
                </ol>
            </Reveal>

            <section id="shell">
                <Reveal>
                    <h2>"Shell"</h2>
                    <p>
                        "Start with a shell you enjoy. Add zoxide so jumping between projects takes a few keystrokes instead of a long cd."
                    </p>
                    <pre><code>"eval \"$(zoxide init zsh)\""</code></pre>
                    <CopyButton text="eval \"$(zoxide init zsh)\"" />
                </Reveal>
            </section>

            <section id="search">
                <Reveal>
                    <h2>"Search"</h2>
                    <p>
                        "ripgrep and fd replace grep and find for day to day work. Both skip ignored files by default, which is usually what you want in a repository."
                    </p>
                    <pre><code>"rg --type rust 'fn main'"</code></pre>
                    <CopyButton text="rg --type rust 'fn main'" />
                </Reveal>
            </section>

            <section id="benchmarks">
                <Reveal>
                    <h2>"Benchmarks"</h2>
                    <p>
                        "When two commands look equally fast, hyperfine settles it with warmup runs and proper statistics."
                    </p>
                    <pre><code>"hyperfine --warmup 3 'fd -e rs' 'find . -name \"*.rs\"'"</code></pre>
                    <CopyButton text="hyperfine --warmup 3 'fd -e rs' 'find . -name \"*.rs\"'" />
                </Reveal>
            </section>
        </article>
        <Footer />
        <BackToTop />
    }
}
