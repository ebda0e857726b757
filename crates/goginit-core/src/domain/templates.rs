//! Fixed Go source bodies written by the generator.
//!
//! Entry-point templates are copied into `cmd/<name>/main.go` byte for byte;
//! they contain no placeholders. [`DB_INIT_TEMPLATE`] is the only
//! parameterized source and carries exactly one variable, `{{PROJECT_NAME}}`.

pub const ECHO: &str = r#"package main

import (
    "github.com/labstack/echo/v4"
)

func main() {
    e := echo.New()
    e.GET("/", func(c echo.Context) error {
        return c.String(200, "Hello, Echo!")
    })
    e.Start(":8080")
}"#;

pub const GIN: &str = r#"package main

import (
    "net/http"

    "github.com/gin-gonic/gin"
)

func main() {
    r := gin.Default()
    r.GET("/", func(c *gin.Context) {
        c.JSON(http.StatusOK, gin.H{
            "message": "Hello, Gin!",
        })
    })
    r.Run(":8080")
}"#;

pub const FIBER: &str = r#"package main
import (
    "log"

    "github.com/gofiber/fiber/v3"
)

func main() {
    // Initialize a new Fiber app
    app := fiber.New()

    app.Get("/", func(c fiber.Ctx) error {
        return c.SendString("Hello, Fiber 👋!")
    })

    // Start the server on port 3000
    log.Fatal(app.Listen(":3000"))
}
"#;

pub const MARTINI: &str = r#"package main
import "github.com/go-martini/martini"

func main() {
  m := martini.Classic()
  m.Get("/", func() string {
    return "Hello Martini!"
  })
  m.Run()
}"#;

pub const CHI: &str = r#"package main

import (
    "net/http"

    "github.com/go-chi/chi/v5"
    "github.com/go-chi/chi/v5/middleware"
)

func main() {
    r := chi.NewRouter()
    r.Use(middleware.Logger)
    r.Get("/", func(w http.ResponseWriter, r *http.Request) {
        w.Write([]byte("Hello, Chi!"))
    })
    http.ListenAndServe(":3000", r)
}"#;

pub const MUX: &str = r#"package main

import (
    "fmt"
    "log"
    "net/http"
    "github.com/gorilla/mux"
)

func main() {
    // Create a new router
    r := mux.NewRouter()

    // Define routes
    r.HandleFunc("/", HomeHandler).Methods("GET")
    r.HandleFunc("/about", AboutHandler).Methods("GET")
    
    // Start the server
    fmt.Println("Server started on :8080")
    log.Fatal(http.ListenAndServe(":8080", r))
}

// HomeHandler handles requests to the root URL
func HomeHandler(w http.ResponseWriter, r *http.Request) {
    w.Write([]byte("Welcome to Mux!"))
}

// AboutHandler handles requests to the /about URL
func AboutHandler(w http.ResponseWriter, r *http.Request) {
    w.Write([]byte("About Page"))
}
"#;

pub const GOFR: &str = r#"package main
import "gofr.dev/pkg/gofr"

func main() {
    // initialise gofr object
    app := gofr.New()

    // register route greet
    app.GET("/greet", func(ctx *gofr.Context) (interface{}, error) {

        return "Hello GoFr!", nil
    })

    // Runs the server, it will listen on the default port 8000.
    // it can be over-ridden through configs
   app.Run()
}"#;

pub const FUEGO: &str = r#"

package main

import "github.com/go-fuego/fuego"

func main() {
	s := fuego.NewServer()

	fuego.Get(s, "/", func(c fuego.ContextNoBody) (string, error) {
		return "Hello, from Fuego!", nil
	})

	s.Run()
}"#;

pub const DEFAULT: &str = r#"package main

import (
    "fmt"
    "log"
    "net/http"
)

func main() {
    http.HandleFunc("/", func(w http.ResponseWriter, r *http.Request) {
        fmt.Fprintln(w, "Hello, World!")
    })

    log.Println("Server started on :8080")
    log.Fatal(http.ListenAndServe(":8080", nil))
}
"#;

/// Variable substituted into [`DB_INIT_TEMPLATE`].
pub const PROJECT_NAME_VAR: &str = "PROJECT_NAME";

/// Driver package referenced by the generated database source.
pub const SQLITE_DRIVER: &str = "github.com/mattn/go-sqlite3";

/// Source of `pkg/db/db.go` when database setup is requested.
pub const DB_INIT_TEMPLATE: &str = r#"package db

import (
    "database/sql"
    _ "github.com/mattn/go-sqlite3"
    "log"
)

func InitDB() *sql.DB {
    db, err := sql.Open("sqlite3", "./pkg/db/{{PROJECT_NAME}}.db")
    if err != nil {
        log.Fatalf("Failed to connect to the database: %v", err)
    }

    // Add any schema setup or other initialization here

    return db
}"#;
