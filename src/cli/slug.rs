use crate::services::slug::derive_slug;

pub fn run(title: &[String]) {
    println!("{}", derive_slug(&title.join(" ")));
}
