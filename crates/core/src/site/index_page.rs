//! Static viewer shell loading `toc.js` and routing `#router/doc-content/...`
//! hashes to the generated pages.

use super::builder::{NO_CONTENT, ROUTER_PREFIX};
use crate::render::html::escape_html;

const SHELL: &str = r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{title}}</title>
<style>
body { margin: 0; font-family: sans-serif; display: flex; height: 100vh; }
#toc { width: 22em; overflow: auto; border-right: 1px solid #ddd; padding: 0.5em; }
#toc ul { list-style: none; padding-left: 1em; margin: 0; }
#toc img { vertical-align: middle; margin-right: 0.25em; }
#toc a.active { font-weight: bold; }
#content { flex: 1; overflow: auto; padding: 1em; }
</style>
</head>
<body>
<nav id="toc"><h1>{{title}}</h1></nav>
<main id="content"></main>
<script>
(function () {
  var index = { idMap: {}, tree: [] };
  var routePrefix = "{{router}}";

  function renderTree(entries) {
    var list = document.createElement("ul");
    entries.forEach(function (entry) {
      var item = document.createElement("li");
      var link = document.createElement("a");
      link.id = "toc-" + entry.id;
      link.href = index.idMap[entry.id] || "{{none}}";
      if (entry.icon) {
        var img = document.createElement("img");
        img.src = entry.icon;
        link.appendChild(img);
      }
      link.appendChild(document.createTextNode(entry.text));
      item.appendChild(link);
      if (entry.children) {
        item.appendChild(renderTree(entry.children));
      }
      list.appendChild(item);
    });
    return list;
  }

  function route() {
    var hash = window.location.hash;
    if (hash.indexOf(routePrefix) !== 0) {
      return;
    }
    var path = hash.substring(routePrefix.length);
    fetch(path)
      .then(function (response) { return response.text(); })
      .then(function (html) { document.getElementById("content").innerHTML = html; });
    Array.prototype.forEach.call(document.querySelectorAll("#toc a"), function (link) {
      link.classList.toggle("active", link.getAttribute("href") === hash);
    });
  }

  window.define = function (data) {
    index = data;
    document.getElementById("toc").appendChild(renderTree(index.tree));
    route();
  };
  window.addEventListener("hashchange", route);
})();
</script>
<script src="{{toc}}"></script>
</body>
</html>
"##;

/// Renders the viewer shell with the given header and index script.
pub fn render_index_page(title: &str, toc_file: &str) -> String {
    SHELL
        .replace("{{title}}", &escape_html(title))
        .replace("{{toc}}", &escape_html(toc_file))
        .replace("{{router}}", ROUTER_PREFIX)
        .replace("{{none}}", NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_escaped() {
        let page = render_index_page("A <b> & C", "toc.js");
        assert!(page.contains("<title>A &lt;b&gt; &amp; C</title>"));
        assert!(page.contains(r#"<script src="toc.js"></script>"#));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn test_shell_routes_on_content_links() {
        let page = render_index_page("Site", "toc.js");
        assert!(page.contains(r##"var routePrefix = "#router/";"##));
        assert!(page.contains(r##"index.idMap[entry.id] || "#";"##));
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.trim_end().ends_with("</html>"));
    }
}
