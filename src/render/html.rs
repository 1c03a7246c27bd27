//! Markup generation.
//!
//! Every user-supplied field passes through [`escape_html`] before it is
//! written, so stored markup is always displayed as text.

use super::escape::escape_html;
use super::view::{ContactListView, ContactView};

/// Render the contact list fragment.
pub fn render_list(view: &ContactListView) -> String {
    match view {
        ContactListView::Empty { placeholder } => {
            format!(r#"<p id="noContacts">{}</p>"#, escape_html(placeholder))
        }
        ContactListView::Items(items) => {
            let mut html = String::new();
            for item in items {
                render_item(&mut html, item);
            }
            html
        }
    }
}

fn render_item(html: &mut String, item: &ContactView) {
    let action = item.delete;
    html.push_str(&format!(
        r#"<div class="contact-item" data-contact-id="{id}">
  <div class="contact-info">
    <h3>{name}</h3>
    <p>Email: {email}</p>
"#,
        id = item.id,
        name = escape_html(&item.name),
        email = escape_html(&item.email),
    ));
    if let Some(phone) = &item.phone {
        html.push_str(&format!("    <p>Phone: {}</p>\n", escape_html(phone)));
    }
    if let Some(address) = &item.address {
        html.push_str(&format!("    <p>Address: {}</p>\n", escape_html(address)));
    }
    html.push_str(&format!(
        r#"    <p><small>Created: {created}</small></p>
  </div>
  <div class="contact-actions">
    <button class="delete" data-action="{action}" data-id="{id}" data-confirm="{confirm}">Delete</button>
  </div>
</div>
"#,
        created = escape_html(&item.created),
        action = action.name(),
        id = item.id,
        confirm = escape_html(action.confirmation()),
    ));
}

/// Render the entry page: form, alert box and the current list.
pub fn render_page(view: &ContactListView) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Contacts</title>
</head>
<body>
  <div id="alertBox" class="alert" style="display:none"></div>
  <form id="contactForm" novalidate>
    <label for="name">Name</label>
    <input id="name" name="name" required>
    <span class="error" id="nameError" style="display:none">Letters and spaces only</span>
    <label for="email">Email</label>
    <input id="email" name="email" type="email" required>
    <span class="error" id="emailError" style="display:none">Enter a valid email</span>
    <label for="phone">Phone</label>
    <input id="phone" name="phone">
    <span class="error" id="phoneError" style="display:none">Digits, spaces, hyphens and parentheses only</span>
    <label for="address">Address</label>
    <textarea id="address" name="address"></textarea>
    <span class="error" id="addressError" style="display:none">Symbols &lt; &gt; $ # {{ }} [ ] \ are not allowed</span>
    <button type="submit">Save</button>
  </form>
  <div id="contactsContainer">
{list}  </div>
  <script>{script}</script>
</body>
</html>
"#,
        list = render_list(view),
        script = PAGE_SCRIPT,
    )
}

/// Wires the form and the `data-action` buttons to the JSON API.
const PAGE_SCRIPT: &str = r#"
const form = document.getElementById('contactForm');
const alertBox = document.getElementById('alertBox');
function banner(message, kind) {
  alertBox.textContent = message;
  alertBox.className = 'alert ' + kind;
  alertBox.style.display = 'block';
  setTimeout(() => { alertBox.style.display = 'none'; }, 3000);
}
async function call(method, url, body) {
  const res = await fetch(url, { method, headers: { 'Content-Type': 'application/json' }, body });
  const data = await res.json();
  if (!res.ok) {
    (data.fields || []).forEach(f => { document.getElementById(f + 'Error').style.display = 'block'; });
    throw new Error(data.error);
  }
  return data;
}
form.addEventListener('submit', async (e) => {
  e.preventDefault();
  document.querySelectorAll('.error').forEach(el => { el.style.display = 'none'; });
  const draft = Object.fromEntries(['name', 'email', 'phone', 'address'].map(k => [k, form.elements[k].value.trim()]));
  try { await call('POST', '/api/contacts', JSON.stringify(draft)); location.reload(); }
  catch (err) { banner(err.message, 'error'); }
});
document.getElementById('contactsContainer').addEventListener('click', async (e) => {
  const button = e.target.closest('[data-action="delete"]');
  if (!button || !confirm(button.dataset.confirm)) return;
  try { await call('DELETE', '/api/contacts/' + button.dataset.id); location.reload(); }
  catch (err) { banner(err.message, 'error'); }
});
"#;
