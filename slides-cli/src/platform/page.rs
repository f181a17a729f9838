//! 页面外壳
//!
//! 幻灯片片段嵌入一个独立的 HTML 页面：一次只显示一张（`.current`），
//! 点击、空格、右、下翻到下一张，左、上翻回上一张，`f` 在等宽、无衬线、衬线字体间循环。

const HTML_TMPL: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>Slides</title>
<style type="text/css">
{{style}}
</style>
</head>
<body>
<div id="slides" class="font-mono">
{{data}}
</div>
<script>
{{javascript}}
</script>
</body>
</html>
"#;

const STYLESHEET: &str = r#"* { border: 0; margin: 0; padding: 0; box-sizing: border-box; }
body {
	background-color: #ffffea;
	font-size: 24pt;
	line-height: 1.7;
}
#slides {
	display: flex;
	flex-flow: row nowrap;
}
section {
	display: none;
	flex: none;
	width: 100vw;
	height: 100vh;
	align-items: center;
	justify-content: center;
	flex-flow: column wrap;
	text-align: left;
	padding: 1em;
	user-select: none;
	cursor: default;
}
section > div {
	display: block;
	position: relative;
}
.current {
	display: flex;
}
img {
	display: block;
	position: relative;
	max-width: 100vw;
	max-height: 100vh;
}
.font-mono { font-family: monospace; }
.font-sans { font-family: sans-serif; }
.font-serif { font-family: serif; }"#;

const JAVASCRIPT: &str = r#"var slideIndex = 0;
var fonts = ["font-mono", "font-sans", "font-serif"];

function slides() {
	return document.getElementsByTagName("section");
}

function showSlide(n) {
	var all = slides();
	if (all.length === 0) { return; }
	slideIndex = Math.max(0, Math.min(n, all.length - 1));
	for (var i = 0; i < all.length; i++) {
		all[i].classList.toggle("current", i === slideIndex);
	}
}

function cycleFont() {
	var cl = document.getElementById("slides").classList;
	for (var i = 0; i < fonts.length; i++) {
		if (cl.contains(fonts[i])) {
			cl.remove(fonts[i]);
			cl.add(fonts[(i + 1) % fonts.length]);
			return;
		}
	}
	cl.add(fonts[0]);
}

for (var s = slides(), i = 0; i < s.length; i++) {
	s[i].onclick = function () { showSlide(slideIndex + 1); };
}

window.onkeydown = function (e) {
	switch (e.key) {
	case "ArrowLeft":
	case "ArrowUp":
		showSlide(slideIndex - 1);
		break;
	case " ":
	case "ArrowRight":
	case "ArrowDown":
		showSlide(slideIndex + 1);
		break;
	case "f":
		cycleFont();
		break;
	}
};

showSlide(0);"#;

/// 把幻灯片片段嵌入完整页面
pub fn wrap_page(markup: &str) -> String {
    // 片段最后替换，里面出现的占位符文本不会被展开
    HTML_TMPL
        .replace("{{style}}", STYLESHEET)
        .replace("{{javascript}}", JAVASCRIPT)
        .replace("{{data}}", markup.trim_end_matches('\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_page_embeds_markup() {
        let page = wrap_page("<section><div>\nhi\n</div></section>\n");
        assert!(page.starts_with("<!doctype html>"));
        assert!(page.contains(
            "<div id=\"slides\" class=\"font-mono\">\n<section><div>\nhi\n</div></section>\n</div>"
        ));
        assert!(page.contains("function cycleFont()"));
        assert!(page.contains("background-color: #ffffea;"));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn test_placeholder_text_in_markup_is_not_expanded() {
        let page = wrap_page("{{style}}");
        assert_eq!(page.matches("{{style}}").count(), 1);
        assert_eq!(page.matches("background-color").count(), 1);
    }
}
