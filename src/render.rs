//! HTML rendering for outfit responses
//!
//! Produces a single self-contained page with inline CSS. Rendering is pure:
//! the same response always yields the same bytes.

use crate::types::{OutfitResponse, Product, PLACEHOLDER_LINK};

/// Page title and main heading
const PAGE_TITLE: &str = "생성된 코디 이미지";

/// Shown in place of the outfit image when the response has none
pub const NO_IMAGE_PLACEHOLDER: &str = "<p>이미지가 없습니다.</p>";

/// Shown in place of the product grid when the response has no products
pub const NO_PRODUCTS_PLACEHOLDER: &str =
    "<div class=\"no-products\"><p>상품이 없습니다.</p></div>";

/// Snippets are cut to this many characters
const SNIPPET_MAX_CHARS: usize = 100;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Cut an already-escaped snippet to its first 100 characters and append
/// `...`. The ellipsis is appended even when nothing was cut.
pub fn truncate_snippet(escaped: &str) -> String {
    let head: String = escaped.chars().take(SNIPPET_MAX_CHARS).collect();
    format!("{}...", head)
}

/// CSS styles for the page, indented to sit inside `<style>`
fn css_styles() -> &'static str {
    r#"        body {
            font-family: Arial, sans-serif;
            padding: 20px;
            background-color: #f5f5f5;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            padding: 20px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        h1 {
            color: #333;
        }
        .info {
            background: #f9f9f9;
            padding: 15px;
            border-radius: 4px;
            margin: 20px 0;
        }
        .info p {
            margin: 5px 0;
        }
        img {
            max-width: 100%;
            height: auto;
            border: 1px solid #ddd;
            border-radius: 4px;
            margin: 20px 0;
        }
        .products {
            margin-top: 30px;
        }
        .products h2 {
            color: #333;
            border-bottom: 2px solid #333;
            padding-bottom: 10px;
        }
        .product-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(250px, 1fr));
            gap: 20px;
            margin-top: 20px;
        }
        .product-item {
            border: 1px solid #ddd;
            border-radius: 4px;
            padding: 15px;
            background: #fff;
            transition: box-shadow 0.3s;
        }
        .product-item:hover {
            box-shadow: 0 4px 8px rgba(0,0,0,0.1);
        }
        .product-item img {
            width: 100%;
            height: 200px;
            object-fit: cover;
            border-radius: 4px;
            margin-bottom: 10px;
        }
        .product-item h3 {
            margin: 0 0 10px 0;
            font-size: 14px;
            color: #333;
            height: 40px;
            overflow: hidden;
        }
        .product-item p {
            margin: 5px 0;
            font-size: 12px;
            color: #666;
        }
        .product-item .product-query {
            color: #999;
            font-style: italic;
        }
        .product-item a {
            display: inline-block;
            margin-top: 10px;
            padding: 8px 15px;
            background: #007bff;
            color: white;
            text-decoration: none;
            border-radius: 4px;
            font-size: 12px;
        }
        .product-item a:hover {
            background: #0056b3;
        }
        .no-products {
            text-align: center;
            padding: 40px;
            color: #999;
        }
"#
}

/// Generate the HTML card for a single product
fn product_card_html(product: &Product) -> String {
    let title = html_escape(product.title());
    let image_url = html_escape(product.image_url());
    let link = html_escape(product.link());
    let snippet = html_escape(product.snippet());
    let search_query = html_escape(product.search_query());

    let image_html = if image_url.is_empty() {
        String::new()
    } else {
        format!(
            r#"<img src="{}" alt="{}" onerror="this.style.display='none'" />"#,
            image_url, title
        )
    };

    let snippet_html = if snippet.is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>", truncate_snippet(&snippet))
    };

    let link_html = if link == PLACEHOLDER_LINK {
        String::new()
    } else {
        format!(r#"<a href="{}" target="_blank">상품 보기</a>"#, link)
    };

    let mut html = String::from("            <div class=\"product-item\">\n");
    html.push_str(&format!("                {}\n", image_html));
    html.push_str(&format!("                <h3>{}</h3>\n", title));
    html.push_str(&format!("                {}\n", snippet_html));
    if !search_query.is_empty() {
        html.push_str(&format!(
            "                <p class=\"product-query\">검색어: {}</p>\n",
            search_query
        ));
    }
    html.push_str(&format!("                {}\n", link_html));
    html.push_str("            </div>\n");
    html
}

/// Render a complete HTML document for an outfit response
pub fn render_outfit_page(outfit: &OutfitResponse) -> String {
    let products = outfit.products();

    let outfit_image_html = if outfit.outfit_image_url().is_empty() {
        NO_IMAGE_PLACEHOLDER.to_string()
    } else {
        format!(
            r#"<img src="{}" alt="코디 이미지" />"#,
            html_escape(outfit.outfit_image_url())
        )
    };

    let mut html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
{css}    </style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        <div class="info">
            <p><strong>설명:</strong> {description}</p>
            <p><strong>검색 쿼리:</strong> {search_query}</p>
            <p><strong>검색된 상품 수:</strong> {count}개</p>
        </div>
        {outfit_image}
        <div class="products">
            <h2>추천 상품 ({count}개)</h2>
"#,
        title = PAGE_TITLE,
        css = css_styles(),
        description = html_escape(outfit.description()),
        search_query = html_escape(outfit.search_query()),
        count = products.len(),
        outfit_image = outfit_image_html,
    );

    if products.is_empty() {
        html.push_str(&format!("            {}\n", NO_PRODUCTS_PLACEHOLDER));
    } else {
        html.push_str("            <div class=\"product-grid\">\n");
        for product in products {
            html.push_str(&product_card_html(product));
        }
        html.push_str("            </div>\n");
    }

    html.push_str(
        r#"        </div>
    </div>
</body>
</html>"#,
    );

    html
}
