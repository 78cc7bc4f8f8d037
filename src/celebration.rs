use rand::seq::SliceRandom;
use std::time::SystemTime;

/// One glyph of the save-acknowledgment burst.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub symbol: char,
    pub color_index: usize,
    pub age: f64,
    pub max_age: f64,
    /// Banner glyphs fly to a fixed position and hold; confetti falls.
    pub anchored: bool,
    pub target_x: f64,
    pub target_y: f64,
}

impl Particle {
    fn confetti(x: f64, y: f64) -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();

        Self {
            x,
            y,
            vel_x: rng.gen_range(-3.0..3.0),
            vel_y: rng.gen_range(-4.0..-1.0),
            symbol: *['✨', '🎉', '⭐', '💪', '🏅', '✓', '🎊']
                .choose(&mut rng)
                .unwrap_or(&'✨'),
            color_index: rng.gen_range(0..7),
            age: 0.0,
            max_age: rng.gen_range(2.0..4.0),
            anchored: false,
            target_x: x,
            target_y: y,
        }
    }

    fn banner(x: f64, y: f64, target_x: f64, target_y: f64, symbol: char, color: usize) -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();

        Self {
            x,
            y,
            vel_x: target_x - x,
            vel_y: target_y - y,
            symbol,
            color_index: color,
            age: 0.0,
            max_age: rng.gen_range(3.0..5.0),
            anchored: true,
            target_x,
            target_y,
        }
    }

    fn update(&mut self, dt: f64) -> bool {
        if self.anchored {
            let dist = ((self.target_x - self.x).powi(2) + (self.target_y - self.y).powi(2)).sqrt();
            if dist > 1.0 {
                self.x += self.vel_x * dt;
                self.y += self.vel_y * dt;
                self.vel_x *= 0.95;
                self.vel_y *= 0.95;
            } else {
                self.x = self.target_x;
                self.y = self.target_y;
                self.vel_x = 0.0;
                self.vel_y = 0.0;
            }
        } else {
            self.x += self.vel_x * dt;
            self.y += self.vel_y * dt;
            self.vel_y += 15.0 * dt; // gravity
        }

        self.age += dt;
        self.age < self.max_age
    }
}

/// Confetti-and-banner animation played when the user saves the session.
/// Purely visual; nothing is written anywhere.
#[derive(Debug)]
pub struct Celebration {
    pub particles: Vec<Particle>,
    pub started_at: SystemTime,
    pub duration: f64,
    pub is_active: bool,
    pub area_width: f64,
    pub area_height: f64,
}

impl Celebration {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            started_at: SystemTime::now(),
            duration: 3.0,
            is_active: false,
            area_width: 80.0,
            area_height: 24.0,
        }
    }

    pub fn start(&mut self, width: u16, height: u16) {
        use rand::Rng;
        let mut rng = rand::thread_rng();

        self.particles.clear();
        self.started_at = SystemTime::now();
        self.is_active = true;
        self.area_width = width as f64;
        self.area_height = height as f64;

        let center_x = width as f64 / 2.0;
        let center_y = height as f64 / 2.0;

        let banners = ["SAVED!", "LOGGED!", "STRONG!", "NICE WORK!", "CRUSHED IT!"];
        let chosen = banners.choose(&mut rng).unwrap_or(&"SAVED!");

        self.spawn_banner(chosen, center_x, center_y, &mut rng);

        for _ in 0..25 {
            let offset_x = rng.gen_range(-15.0..15.0);
            let offset_y = rng.gen_range(-8.0..8.0);
            self.particles
                .push(Particle::confetti(center_x + offset_x, center_y + offset_y));
        }
    }

    fn spawn_banner(
        &mut self,
        text: &str,
        center_x: f64,
        center_y: f64,
        rng: &mut rand::rngs::ThreadRng,
    ) {
        use rand::Rng;

        let char_width = 2.0;
        let text_width = (text.len() as f64 - 1.0) * char_width;
        let left = center_x - text_width / 2.0;

        for (i, ch) in text.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            let target_x = left + i as f64 * char_width;
            let target_y = center_y - 2.0;

            let from_x = center_x + rng.gen_range(-10.0..10.0);
            let from_y = center_y + rng.gen_range(-5.0..5.0);

            self.particles.push(Particle::banner(
                from_x,
                from_y,
                target_x,
                target_y,
                ch,
                rng.gen_range(0..7),
            ));
        }
    }

    pub fn update(&mut self) {
        if !self.is_active {
            return;
        }

        let elapsed = self.started_at.elapsed().unwrap_or_default().as_secs_f64();
        if elapsed >= self.duration {
            self.is_active = false;
            self.particles.clear();
            return;
        }

        let dt = 0.1;
        let (w, h) = (self.area_width, self.area_height);
        self.particles.retain_mut(|p| {
            let alive = p.update(dt);
            if p.anchored {
                alive
            } else {
                let buffer = 5.0;
                let off_screen = p.y > h + buffer || p.x < -buffer || p.x > w + buffer;
                alive && !off_screen
            }
        });
    }
}

impl Default for Celebration {
    fn default() -> Self {
        Self::new()
    }
}
