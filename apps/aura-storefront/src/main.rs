mod shop;

fn main() -> Result<(), eframe::Error> {
    shop::run()
}
