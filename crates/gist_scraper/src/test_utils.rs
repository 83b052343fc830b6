//! Shared fixtures for unit tests.

pub const ARTICLE_HTML: &str = r#"
    <!DOCTYPE html>
    <html>
    <head><title>Understanding Ownership</title></head>
    <body>
        <nav><a href="/">Home</a> <a href="/blog">Blog</a></nav>
        <article>
            <h1>Understanding Ownership</h1>
            <p>Ownership is a set of rules that govern how a Rust program manages memory.
            All programs have to manage the way they use a computer's memory while running.
            Some languages have garbage collection that regularly looks for no-longer-used memory.</p>
            <p>In other languages, the programmer must explicitly allocate and free the memory.
            Rust uses a third approach: memory is managed through a system of ownership with a
            set of rules that the compiler checks. See the <a href="https://doc.rust-lang.org/book/">book</a>
            for a longer introduction to these rules and why they exist.</p>
            <p>If any of the rules are violated, the program won't compile. None of the features
            of ownership will slow down your program while it's running. Because ownership is a
            new concept for many programmers, it does take some time to get used to it.</p>
        </article>
        <footer>Copyright notice and unrelated links</footer>
    </body>
    </html>
"#;
