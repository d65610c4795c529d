use crate::models::User;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

/// Listing page: every user with edit and delete controls, plus the create form.
pub fn index(users: &[User]) -> String {
    let mut body = String::from("<h1>Users</h1>\n<ul>\n");
    for user in users {
        body.push_str(&format!(
            "<li>{id}: {name} <a href=\"/users/{id}/edit\">Edit</a> \
             <form action=\"/users/{id}\" method=\"POST\" style=\"display:inline\">\
             <input type=\"hidden\" name=\"_method\" value=\"DELETE\">\
             <button type=\"submit\">Delete</button></form></li>\n",
            id = user.id,
            name = escape(&user.name),
        ));
    }
    body.push_str("</ul>\n");
    body.push_str(
        "<h2>Add user</h2>\n\
         <form action=\"/users\" method=\"POST\">\
         <input type=\"text\" name=\"name\" placeholder=\"Name\">\
         <button type=\"submit\">Add</button></form>\n",
    );
    page("Users", &body)
}

pub fn edit(user: &User) -> String {
    let body = format!(
        "<h1>Edit user {id}</h1>\n\
         <form action=\"/users/{id}\" method=\"POST\">\
         <input type=\"hidden\" name=\"_method\" value=\"PUT\">\
         <input type=\"text\" name=\"name\" value=\"{name}\">\
         <button type=\"submit\">Save</button></form>\n\
         <a href=\"/\">Back</a>\n",
        id = user.id,
        name = escape(&user.name),
    );
    page("Edit user", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_lists_users_in_order() {
        let html = index(&[User::new(1, "Alice"), User::new(3, "Raj")]);
        let alice = html.find("1: Alice").unwrap();
        let raj = html.find("3: Raj").unwrap();
        assert!(alice < raj);
        assert!(html.contains("href=\"/users/3/edit\""));
        assert!(html.contains("action=\"/users\""));
    }

    #[test]
    fn names_are_escaped() {
        let html = index(&[User::new(1, "<script>\"x\"</script>")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;&quot;x&quot;&lt;/script&gt;"));
    }

    #[test]
    fn edit_prefills_name() {
        let html = edit(&User::new(2, "Bob & Co"));
        assert!(html.contains("action=\"/users/2\""));
        assert!(html.contains("value=\"Bob &amp; Co\""));
    }
}
