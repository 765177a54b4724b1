//! HTML pages shared by the unit tests

pub const PAGE_ONE: &str = r#"<html><body>
<div class="quote">
    <span class="text">“The world as we have created it is a process of our thinking.”</span>
    <span>by <small class="author">Albert Einstein</small></span>
    <div class="tags">
        <a class="tag" href="/tag/change/">change</a>
        <a class="tag" href="/tag/thinking/">thinking</a>
    </div>
</div>
<div class="quote">
    <span class="text">“It is our choices, Harry, that show what we truly are.”</span>
    <span>by <small class="author">J.K. Rowling</small></span>
    <div class="tags">
        <a class="tag" href="/tag/choices/">choices</a>
    </div>
</div>
<nav><ul class="pager">
    <li class="next"><a href="/page/2/">Next <span>→</span></a></li>
</ul></nav>
</body></html>"#;

pub const PAGE_TWO: &str = r#"<html><body>
<div class="quote">
    <span class="text">“Try not to become a man of success.”</span>
    <span>by <small class="author">Albert Einstein</small></span>
    <div class="tags">
        <a class="tag" href="/tag/success/">success</a>
        <a class="tag" href="/tag/thinking/">thinking</a>
    </div>
</div>
<nav><ul class="pager">
    <li class="previous"><a href="/page/1/">← Previous</a></li>
</ul></nav>
</body></html>"#;

/// Page 2 of a three-page run; only used to check nothing past a failure is fetched
pub const PAGE_TWO_OF_THREE: &str = r#"<html><body>
<div class="quote">
    <span class="text">“Middle page.”</span>
    <small class="author">Nobody</small>
</div>
<ul class="pager"><li class="next"><a href="/page/3/">Next</a></li></ul>
</body></html>"#;

pub const PAGE_MISSING_AUTHOR: &str = r#"<html><body>
<div class="quote">
    <span class="text">“Anonymous wisdom.”</span>
    <div class="tags"><a class="tag" href="/tag/misc/">misc</a></div>
</div>
</body></html>"#;

pub const PAGE_EMPTY: &str = r#"<html><body>
<p>No quotes found!</p>
<ul class="pager"><li class="next"><a href="/page/99/">Next</a></li></ul>
</body></html>"#;

pub const PAGE_SELF_LINK: &str = r#"<html><body>
<div class="quote"><span class="text">Loop</span><small class="author">Someone</small></div>
<ul class="pager"><li class="next"><a href="/page/1/">Next</a></li></ul>
</body></html>"#;

pub const PAGE_SELF_LINK_FRAGMENT: &str = r#"<html><body>
<div class="quote"><span class="text">Anchored</span><small class="author">Someone</small></div>
<ul class="pager"><li class="next"><a href="/page/1/#top">Next</a></li></ul>
</body></html>"#;
