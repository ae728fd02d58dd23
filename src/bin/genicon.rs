use appicon::IconError;
use appicon::logger::log_error;

fn main() -> Result<(), IconError> {
    match appicon::generate_icon() {
        Ok(icon) => {
            println!("{}", icon);
            Ok(())
        }
        Err(e) => {
            log_error("icon generation failed", &e);
            Err(e)
        }
    }
}
