//! Built-in seed content for the public pages.
//!
//! Shown whenever the gateway cannot be reached, so an anonymous visitor
//! never sees an empty page because of a transient backend outage.

use crate::post::Post;
use crate::project::Project;

fn post(
    id: &str,
    title: &str,
    excerpt: &str,
    content: &str,
    image: &str,
    date: &str,
    category: &str,
    read_time: &str,
    tags: &[&str],
) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        image: image.to_string(),
        author: "Ubaldino Ramos".to_string(),
        date: date.to_string(),
        category: category.to_string(),
        read_time: read_time.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Seed blog posts.
pub fn posts() -> Vec<Post> {
    vec![
        post(
            "1",
            "Introducción a React Hooks y sus Ventajas",
            "Descubre cómo los Hooks de React han revolucionado la forma en que escribimos componentes funcionales y gestionamos el estado.",
            "Los React Hooks han cambiado fundamentalmente la forma en que desarrollamos aplicaciones React. En este artículo, exploraremos useState, useEffect y otros hooks esenciales...",
            "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&h=400&fit=crop",
            "2025-07-15",
            "React",
            "5 min",
            &["React", "JavaScript", "Frontend"],
        ),
        post(
            "2",
            "Mejores Prácticas para APIs RESTful",
            "Aprende a diseñar APIs RESTful robustas y escalables siguiendo las mejores prácticas de la industria.",
            "El diseño de APIs es crucial para el éxito de cualquier aplicación moderna. En este post, cubriremos convenciones de nomenclatura, códigos de estado HTTP...",
            "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=800&h=400&fit=crop",
            "2025-07-10",
            "Backend",
            "8 min",
            &["API", "Backend", "Node.js"],
        ),
        post(
            "3",
            "Optimización de Rendimiento en Aplicaciones Web",
            "Técnicas y estrategias para mejorar el rendimiento de tus aplicaciones web y ofrecer una experiencia de usuario excepcional.",
            "El rendimiento es clave para la experiencia del usuario. Exploraremos lazy loading, code splitting, optimización de imágenes y más...",
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=400&fit=crop",
            "2025-07-05",
            "Performance",
            "10 min",
            &["Performance", "Optimization", "Web"],
        ),
        post(
            "4",
            "MongoDB vs PostgreSQL: ¿Cuál Elegir?",
            "Comparativa detallada entre bases de datos NoSQL y SQL para ayudarte a tomar la mejor decisión para tu proyecto.",
            "La elección de la base de datos es fundamental. Analizaremos casos de uso, ventajas y desventajas de MongoDB y PostgreSQL...",
            "https://images.unsplash.com/photo-1544383835-bda2bc66a55d?w=800&h=400&fit=crop",
            "2025-06-28",
            "Database",
            "7 min",
            &["MongoDB", "PostgreSQL", "Database"],
        ),
    ]
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    image: &str,
    technologies: &[&str],
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        live_url: "https://example.com".to_string(),
        github_url: "https://github.com/example".to_string(),
        category: "web".to_string(),
    }
}

/// Seed portfolio projects.
pub fn projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "E-commerce Platform",
            "Plataforma de comercio electrónico completa con carrito de compras, pasarela de pago y panel de administración.",
            "https://images.unsplash.com/photo-1557821552-17105176677c?w=800&h=600&fit=crop",
            &["React", "Node.js", "MongoDB", "Stripe"],
        ),
        project(
            "2",
            "Dashboard Analytics",
            "Dashboard interactivo para visualización de datos en tiempo real con gráficos y métricas personalizables.",
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop",
            &["React", "D3.js", "FastAPI", "PostgreSQL"],
        ),
        project(
            "3",
            "Task Management App",
            "Aplicación de gestión de tareas con colaboración en equipo, notificaciones y seguimiento de proyectos.",
            "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=800&h=600&fit=crop",
            &["React", "Express", "MySQL", "Socket.io"],
        ),
        project(
            "4",
            "Portfolio CMS",
            "Sistema de gestión de contenido especializado para portafolios creativos con galería multimedia.",
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=600&fit=crop",
            &["React", "FastAPI", "MongoDB"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_posts_are_well_formed() {
        let posts = posts();
        assert_eq!(posts.len(), 4);
        for post in &posts {
            assert!(!post.title.is_empty());
            assert!(!post.tags.is_empty());
            assert_eq!(post.author, "Ubaldino Ramos");
        }
    }

    #[test]
    fn seed_projects_are_well_formed() {
        for project in projects() {
            assert!(!project.title.is_empty());
            assert!(!project.technologies.is_empty());
        }
    }
}
