/// Route change requested by a screen. The console implements it on top of
/// the browser history; tests record the requested paths.
pub trait Navigate {
    fn navigate(&self, path: &str);
}

impl<F> Navigate for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path)
    }
}
