use browsercookies::cookies::attributes::{CookieAttributes, EraseOptions, SameSite};
use browsercookies::cookies::codec::CookieCodec;
use browsercookies::cookies::jar::EmulatedCookieJar;

fn main() {
    let mut cookies = CookieCodec::new(EmulatedCookieJar::new());
    cookies.defaults_mut().samesite = Some(SameSite::Lax);

    println!("--- Step 1: Setting cookies ---");
    cookies.set("theme", "dark", Some(&CookieAttributes::new().expires(30)));
    cookies.set("báñâñâ", "¿yéllów?", None);
    let scoped = CookieAttributes::new().path("/account").secure(true);
    cookies.set("cart", "3 items", Some(&scoped));

    for cookie in cookies.storage().cookies() {
        println!("stored: {:?}", cookie);
    }

    println!("\n--- Step 2: Reading cookies ---");
    println!("theme = {:?}", cookies.get("theme"));
    println!("all   = {:?}", cookies.all());

    println!("\n--- Step 3: Erasing cookies ---");
    cookies.erase("cart", Some(&EraseOptions::from(&scoped)));
    println!("cart  = {:?}", cookies.get("cart"));
}
