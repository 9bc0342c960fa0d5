//! End-to-end rendering of comment text.
//!
//! Covers escaping, raw HTML, emoji, links and every kind of media embed as
//! seen through the block front-end.

use inlinemark::Config;

#[macro_use]
mod prelude;
use prelude::*;

#[test]
fn escapes_html() {
    assert_eq!(
        render_html("<span>foo</span>"),
        "<p>&lt;span&gt;foo&lt;/span&gt;</p>"
    );
}

#[test]
fn raw_html_is_shown_not_parsed() {
    let comment = "<div>\n\
                   <em>*foo*</em>\n\
                   <em>*bar*</em>\n\
                   *foobar*\n\
                   @nitely\n\
                   *<em>foobar</em>*\n\
                   </div>\n\
                   <em>*foo*</em>\n\
                   *<em>foobar</em>*\n";
    assert_eq!(
        render_html(comment),
        "<p>&lt;div&gt;\n\
         &lt;em&gt;*foo*&lt;/em&gt;\n\
         &lt;em&gt;*bar*&lt;/em&gt;\n\
         *foobar*\n\
         @nitely\n\
         *&lt;em&gt;foobar&lt;/em&gt;*\n\
         &lt;/div&gt;<br>\n\
         &lt;em&gt;*foo*&lt;/em&gt;<br>\n\
         <em>&lt;em&gt;foobar&lt;/em&gt;</em></p>"
    );
}

#[test]
fn emoji_shortcodes() {
    assert_eq!(
        render_html(":airplane:, :8ball: :+1: :bademoji: foo:"),
        "<p><i class=\"tw tw-airplane\" title=\":airplane:\"></i>, \
         <i class=\"tw tw-8ball\" title=\":8ball:\"></i> \
         <i class=\"tw tw-plus1\" title=\":+1:\"></i> \
         :bademoji: foo:</p>"
    );
}

#[test]
fn images() {
    let comment = "http://foo.bar/image.png\n\
                   http://www.foo.bar.fb/path/image.png\n\
                   https://foo.bar/image.png\n\
                   bad http://foo.bar/image.png\n\
                   http://foo.bar/image.png bad\n\
                   http://bad.png\n\
                   http://foo.bar/.png\n\
                   ![im](http://foo.bar/not_imagified.png)\n\
                   foo.bar/bad.png\n\
                   \n\
                   http://foo.bar/<escaped>.png";
    let expected = html_lines!(
        "<p><img src=\"http://foo.bar/image.png\" alt=\"image\" title=\"image\"></p>",
        "<p><img src=\"http://www.foo.bar.fb/path/image.png\" alt=\"image\" title=\"image\"></p>",
        "<p><img src=\"https://foo.bar/image.png\" alt=\"image\" title=\"image\"></p>",
        "<p>bad <a rel=\"nofollow\" href=\"http://foo.bar/image.png\">http://foo.bar/image.png</a><br>",
        "<a rel=\"nofollow\" href=\"http://foo.bar/image.png\">http://foo.bar/image.png</a> bad<br>",
        "<a rel=\"nofollow\" href=\"http://bad.png\">http://bad.png</a><br>",
        "<a rel=\"nofollow\" href=\"http://foo.bar/.png\">http://foo.bar/.png</a><br>",
        "<img src=\"http://foo.bar/not_imagified.png\" alt=\"im\"><br>",
        "foo.bar/bad.png</p>",
        "<p><a rel=\"nofollow\" href=\"http://foo.bar/&lt;escaped&gt;.png\">\
         http://foo.bar/&lt;escaped&gt;.png</a></p>",
    );
    assert_eq!(render_html(comment), expected);
}

fn youtube_iframe(id: &str, start: Option<u32>) -> String {
    let start = start.map(|s| format!("&amp;start={s}")).unwrap_or_default();
    format!(
        "<span class=\"video\"><iframe src=\"https://www.youtube.com/embed/{id}?html5=1{start}\" \
         allowfullscreen></iframe></span>"
    )
}

#[test]
fn youtube() {
    let comment = "https://www.youtube.com/watch?v=Z0UISCEe52Y\n\
                   https://www.youtube.com/watch?v=Z0UISCEe52Y&t=1m13s\n\
                   https://www.youtube.com/watch?v=O1QQajfobPw&t=1h1m38s\n\
                   https://www.youtube.com/watch?v=O1QQajfobPw&t=105m\n\
                   https://www.youtube.com/watch?v=O1QQajfobPw&feature=youtu.be&t=3698\n\
                   http://youtu.be/afyK1HSFfgw\n\
                   http://youtu.be/O1QQajfobPw?t=1h1m38s\n\
                   https://www.youtube.com/embed/vsF0K3Ou1v0\n\
                   https://www.youtube.com/watch?v=<bad>\n\
                   https://www.noyoutube.com/watch?v=Z0UISCEe52Y\n\
                   badbad https://www.youtube.com/watch?v=Z0UISCEe52Y\n\
                   \n\
                   https://www.youtube.com/watch?v=Z0UISCEe52Y badbad\n";
    let expected = html_lines!(
        youtube_iframe("Z0UISCEe52Y", None),
        youtube_iframe("Z0UISCEe52Y", Some(73)),
        youtube_iframe("O1QQajfobPw", Some(3698)),
        youtube_iframe("O1QQajfobPw", Some(6300)),
        youtube_iframe("O1QQajfobPw", Some(3698)),
        youtube_iframe("afyK1HSFfgw", None),
        youtube_iframe("O1QQajfobPw", Some(3698)),
        youtube_iframe("vsF0K3Ou1v0", None),
        "<p><a rel=\"nofollow\" href=\"https://www.youtube.com/watch?v=&lt;bad&gt;\">\
         https://www.youtube.com/watch?v=&lt;bad&gt;</a></p>"
            .to_string(),
        "<p><a rel=\"nofollow\" href=\"https://www.noyoutube.com/watch?v=Z0UISCEe52Y\">\
         https://www.noyoutube.com/watch?v=Z0UISCEe52Y</a></p>"
            .to_string(),
        "<p>badbad <a rel=\"nofollow\" href=\"https://www.youtube.com/watch?v=Z0UISCEe52Y\">\
         https://www.youtube.com/watch?v=Z0UISCEe52Y</a></p>"
            .to_string(),
        "<p><a rel=\"nofollow\" href=\"https://www.youtube.com/watch?v=Z0UISCEe52Y\">\
         https://www.youtube.com/watch?v=Z0UISCEe52Y</a> badbad</p>"
            .to_string(),
    );
    assert_eq!(render_html(comment), expected);
}

#[test]
fn youtube_offset_in_seconds() {
    assert_eq!(
        render_html("https://www.youtube.com/watch?v=Z0UISCEe52Y&t=1h1m38s"),
        youtube_iframe("Z0UISCEe52Y", Some(3698))
    );
}

#[test]
fn vimeo() {
    let comment = "https://vimeo.com/11111111\n\
                   https://www.vimeo.com/11111111\n\
                   https://player.vimeo.com/video/11111111\n\
                   https://vimeo.com/channels/11111111\n\
                   https://vimeo.com/groups/name/videos/11111111\n\
                   https://vimeo.com/album/2222222/video/11111111\n\
                   https://vimeo.com/11111111?param=value\n\
                   https://novimeo.com/11111111\n\
                   bad https://novimeo.com/11111111\n\
                   \n\
                   https://novimeo.com/11111111 bad";
    let iframe = "<span class=\"video\"><iframe src=\"https://player.vimeo.com/video/11111111\" \
                  allowfullscreen></iframe></span>";
    let expected = html_lines!(
        iframe,
        iframe,
        iframe,
        iframe,
        iframe,
        iframe,
        iframe,
        "<p><a rel=\"nofollow\" href=\"https://novimeo.com/11111111\">https://novimeo.com/11111111</a></p>",
        "<p>bad <a rel=\"nofollow\" href=\"https://novimeo.com/11111111\">https://novimeo.com/11111111</a></p>",
        "<p><a rel=\"nofollow\" href=\"https://novimeo.com/11111111\">https://novimeo.com/11111111</a> bad</p>",
    );
    assert_eq!(render_html(comment), expected);
}

#[test]
fn gfycat() {
    let comment = "https://gfycat.com/PointedVengefulHyracotherium\n\
                   https://www.gfycat.com/PointedVengefulHyracotherium\n\
                   http://gfycat.com/PointedVengefulHyracotherium\n\
                   http://www.gfycat.com/PointedVengefulHyracotherium\n\
                   bad https://gfycat.com/PointedVengefulHyracotherium\n\
                   https://gfycat.com/PointedVengefulHyracotherium bad";
    let iframe = "<span class=\"video\"><iframe \
                  src=\"https://gfycat.com/ifr/PointedVengefulHyracotherium\" \
                  frameborder=\"0\" scrolling=\"no\" allowfullscreen></iframe></span>";
    let expected = html_lines!(
        iframe,
        iframe,
        iframe,
        iframe,
        "<p>bad <a rel=\"nofollow\" href=\"https://gfycat.com/PointedVengefulHyracotherium\">\
         https://gfycat.com/PointedVengefulHyracotherium</a><br>",
        "<a rel=\"nofollow\" href=\"https://gfycat.com/PointedVengefulHyracotherium\">\
         https://gfycat.com/PointedVengefulHyracotherium</a> bad</p>",
    );
    assert_eq!(render_html(comment), expected);
}

#[rstest]
#[case("video", "mp4")]
#[case("audio", "mp3")]
fn media_files(#[case] tag: &str, #[case] ext: &str) {
    let comment = format!("http://foo.bar/{tag}.{ext}\nhttp://foo.bar/<escaped>.{ext}");
    let expected = html_lines!(
        format!(
            "<{tag} controls><source src=\"http://foo.bar/{tag}.{ext}\">\
             <a rel=\"nofollow\" href=\"http://foo.bar/{tag}.{ext}\">http://foo.bar/{tag}.{ext}</a></{tag}>"
        ),
        format!(
            "<p><a rel=\"nofollow\" href=\"http://foo.bar/&lt;escaped&gt;.{ext}\">\
             http://foo.bar/&lt;escaped&gt;.{ext}</a></p>"
        ),
    );
    assert_eq!(render_html(&comment), expected);
}

#[test]
fn autolinks() {
    let comment = "http://foo.com\nhttp://foo.com?foo=1&bar=2\nhttp://foo.com/<bad>";
    insta::assert_snapshot!(render_html(comment), @r#"
    <p><a rel="nofollow" href="http://foo.com">http://foo.com</a></p>
    <p><a rel="nofollow" href="http://foo.com?foo=1&amp;bar=2">http://foo.com?foo=1&amp;bar=2</a></p>
    <p><a rel="nofollow" href="http://foo.com/&lt;bad&gt;">http://foo.com/&lt;bad&gt;</a></p>
    "#);
}

#[test]
fn angle_bracket_autolinks() {
    assert_eq!(
        render_html("<http://foo.com> <foo@bar.com>"),
        "<p><a rel=\"nofollow\" href=\"http://foo.com\">http://foo.com</a> \
         <a rel=\"nofollow\" href=\"mailto:foo@bar.com\">foo@bar.com</a></p>"
    );
}

#[rstest]
#[case(true, "<p><a rel=\"nofollow\" href=\"http://foo.com\">http://foo.com</a></p>")]
#[case(false, "<p><a href=\"http://foo.com\">http://foo.com</a></p>")]
fn autolink_no_follow(#[case] no_follow: bool, #[case] expected: &str) {
    let config = Config::default().with_no_follow(no_follow);
    assert_eq!(render_with("http://foo.com", &config).html, expected);
}

#[rstest]
#[case("[link](http://foo.com)", true, "<p><a rel=\"nofollow\" href=\"http://foo.com\">link</a></p>")]
#[case("[link](http://foo.com)", false, "<p><a href=\"http://foo.com\">link</a></p>")]
#[case(
    "[link](http://foo.com \"bar\")",
    true,
    "<p><a rel=\"nofollow\" href=\"http://foo.com\" title=\"bar\">link</a></p>"
)]
#[case(
    "[link](http://foo.com \"bar\")",
    false,
    "<p><a href=\"http://foo.com\" title=\"bar\">link</a></p>"
)]
fn links(#[case] comment: &str, #[case] no_follow: bool, #[case] expected: &str) {
    let config = Config::default().with_no_follow(no_follow);
    assert_eq!(render_with(comment, &config).html, expected);
}

#[test]
fn mixed_inline_markup() {
    insta::assert_snapshot!(
        render_html("**Heads up** `cargo test` *before* ~~merging~~ pushing\\!\n\nThanks :smile:"),
        @r#"
    <p><strong>Heads up</strong> <code>cargo test</code> <em>before</em> <del>merging</del> pushing!</p>
    <p>Thanks <i class="tw tw-smile" title=":smile:"></i></p>
    "#
    );
}
