//! HTML views for the inventory pages

use axum::http::StatusCode;

use super::model::Item;

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; margin: 40px; background: #f5f5f5; }
        .container { max-width: 960px; margin: 0 auto; background: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        h1 { color: #333; }
        table { width: 100%; border-collapse: collapse; }
        th, td { text-align: left; padding: 8px; border-bottom: 1px solid #ddd; }
        label { display: block; margin-top: 12px; font-weight: bold; }
        input, textarea { width: 100%; padding: 6px; box-sizing: border-box; }
        form.inline { display: inline; }
        a, button.link { color: #007bff; text-decoration: none; background: none; border: none; padding: 0; cursor: pointer; font: inherit; }
"#;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    <div class="container">
{body}
    </div>
</body>
</html>
"#,
        title = escape(title),
    )
}

/// The item table with edit and delete actions per row.
pub fn list_page(items: &[Item]) -> String {
    let rows: String = items
        .iter()
        .map(|item| {
            format!(
                r#"            <tr>
                <td>{id}</td>
                <td>{name}</td>
                <td>{price}</td>
                <td>{mac}</td>
                <td>{serial}</td>
                <td>{manufacturer}</td>
                <td>{description}</td>
                <td>
                    <a href="/edit/{id}">Edit</a>
                    <form class="inline" method="post" action="/delete/{id}">
                        <button class="link" type="submit">Delete</button>
                    </form>
                </td>
            </tr>
"#,
                id = item.id,
                name = escape(&item.name),
                price = item.price,
                mac = escape(&item.mac_address),
                serial = escape(&item.serial_number),
                manufacturer = escape(&item.manufacturer),
                description = escape(&item.description),
            )
        })
        .collect();

    let body = format!(
        r#"        <h1>Inventory</h1>
        <p><a href="/add">Add item</a></p>
        <table>
            <tr>
                <th>ID</th><th>Name</th><th>Price</th><th>MAC address</th>
                <th>Serial number</th><th>Manufacturer</th><th>Description</th><th></th>
            </tr>
{rows}        </table>
"#
    );
    layout("Inventory", &body)
}

fn item_form(action: &str, submit: &str, item: Option<&Item>) -> String {
    let name = item.map(|i| escape(&i.name)).unwrap_or_default();
    let price = item.map(|i| i.price.to_string()).unwrap_or_default();
    let mac = item.map(|i| escape(&i.mac_address)).unwrap_or_default();
    let serial = item.map(|i| escape(&i.serial_number)).unwrap_or_default();
    let manufacturer = item.map(|i| escape(&i.manufacturer)).unwrap_or_default();
    let description = item.map(|i| escape(&i.description)).unwrap_or_default();

    format!(
        r#"        <form method="post" action="{action}">
            <label for="name">Name</label>
            <input id="name" name="name" maxlength="100" value="{name}">
            <label for="price">Price</label>
            <input id="price" name="price" type="number" step="any" value="{price}">
            <label for="mac_address">MAC address</label>
            <input id="mac_address" name="mac_address" maxlength="100" value="{mac}">
            <label for="serial_number">Serial number</label>
            <input id="serial_number" name="serial_number" maxlength="100" value="{serial}">
            <label for="manufacturer">Manufacturer</label>
            <input id="manufacturer" name="manufacturer" maxlength="100" value="{manufacturer}">
            <label for="description">Description</label>
            <textarea id="description" name="description" rows="4">{description}</textarea>
            <p><button type="submit">{submit}</button> <a href="/">Cancel</a></p>
        </form>
"#,
        action = escape(action),
        submit = escape(submit),
    )
}

pub fn add_page() -> String {
    let body = format!(
        "        <h1>Add item</h1>\n{}",
        item_form("/add", "Add", None)
    );
    layout("Add item", &body)
}

/// The edit form, prefilled from `item`.
pub fn edit_page(item: &Item) -> String {
    let body = format!(
        "        <h1>Edit item {}</h1>\n{}",
        item.id,
        item_form(&format!("/edit/{}", item.id), "Save", Some(item))
    );
    layout("Edit item", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let body = format!(
        "        <h1>{}</h1>\n        <p>{}</p>\n        <p><a href=\"/\">Back to inventory</a></p>\n",
        escape(&title),
        escape(message)
    );
    layout(&title, &body)
}
